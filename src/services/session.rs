//! Owning controllers for the two planners.
//!
//! Each session holds the complete in-memory state of one planner and is the
//! only place that mutates it. Every setter leaves the session consistent:
//! scenario targets are re-applied where the rules say so, and layouts and
//! warnings are always derived fresh from the current state.

use anyhow::Result;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::{
    catalog::{self, CUSTOM_PRESET_ID},
    config::Config,
    models::{
        CameraPosition, DisplayCount, DisplayDimensions, Flushbox, InstallationSpec, Millimeters,
        MountingBracket, MountingReference, ReferencePoint, RoomDimensions, ScenarioKind,
        ValidationWarning, ViewMode, WallConfiguration, WallDisplay,
    },
    services::{
        geometry::{compute_elevation, ElevationInput, ElevationLayout},
        interaction::{
            DimensionAnchor, DimensionOffsets, DragController, DragTarget, DragUpdate, Point,
            Viewport,
        },
        videowall::{compute_wall_layout, room_fit_warnings, WallDimensions, WallLayout},
    },
};

/// Name given to displays whose size was typed in by hand.
pub const CUSTOM_DISPLAY_NAME: &str = "Custom Size";

/// State of the single/dual display elevation planner.
#[derive(Debug, Clone)]
pub struct ElevationSession {
    preset_id: String,
    dimensions: DisplayDimensions,
    spec: InstallationSpec,
    scenario: ScenarioKind,
    display_count: DisplayCount,
    bracket: &'static MountingBracket,
    room: RoomDimensions,
    view: ViewMode,
    show_guides: bool,
    show_camera: bool,
    camera_position: CameraPosition,
}

impl Default for ElevationSession {
    fn default() -> Self {
        let preset = catalog::default_display();
        let mut session = Self {
            preset_id: preset.id.to_string(),
            dimensions: preset.dimensions(),
            spec: InstallationSpec::default(),
            scenario: ScenarioKind::default(),
            display_count: DisplayCount::Single,
            bracket: catalog::default_bracket(),
            room: RoomDimensions::default(),
            view: ViewMode::Front,
            show_guides: false,
            show_camera: false,
            camera_position: CameraPosition::Bottom,
        };
        session.apply_scenario();
        session
    }
}

impl ElevationSession {
    /// Creates a session with the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session from the configured defaults.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let mut session = Self::new();
        session.room = config.room.dimensions();
        session.bracket = catalog::find_bracket(&config.defaults.bracket)?;
        session.scenario = config.default_scenario()?;
        session.select_preset(&config.defaults.display_preset)?;
        session.apply_scenario();
        Ok(session)
    }

    /// Selects a catalog display.
    ///
    /// The `custom` id keeps the current dimensions and only marks them as
    /// user-defined.
    pub fn select_preset(&mut self, id: &str) -> Result<()> {
        match catalog::find_display(id)? {
            Some(preset) => {
                self.preset_id = preset.id.to_string();
                self.dimensions = preset.dimensions();
                self.apply_scenario();
            }
            None => self.preset_id = CUSTOM_PRESET_ID.to_string(),
        }
        Ok(())
    }

    /// Overrides the panel size; the display becomes a custom one.
    pub fn set_dimensions(&mut self, width: f64, height: f64) {
        let mut dimensions = DisplayDimensions::new(width, height).with_name(CUSTOM_DISPLAY_NAME);
        dimensions.depth = self.dimensions.depth;
        self.dimensions = dimensions;
        self.preset_id = CUSTOM_PRESET_ID.to_string();
        self.apply_scenario();
    }

    /// Changes the scenario and applies its target height.
    pub fn select_scenario(&mut self, scenario: ScenarioKind) {
        self.scenario = scenario;
        self.apply_scenario();
    }

    /// Sets the installation height by hand.
    ///
    /// The scenario stays selected; its rule keeps reporting against the new
    /// height until the scenario or display changes again.
    pub fn set_installation(&mut self, spec: InstallationSpec) {
        self.spec = spec;
    }

    /// Sets the AFFL value, keeping the reference point.
    pub fn set_affl(&mut self, affl_value: f64) {
        self.spec.affl_value = affl_value;
    }

    /// Sets the reference point, keeping the AFFL value.
    pub fn set_reference_point(&mut self, reference_point: ReferencePoint) {
        self.spec.reference_point = reference_point;
    }

    /// Single or dual installation. Vertical placement is unaffected.
    pub fn set_display_count(&mut self, count: DisplayCount) {
        self.display_count = count;
    }

    /// Selects the wall bracket by id.
    pub fn select_bracket(&mut self, id: &str) -> Result<()> {
        self.bracket = catalog::find_bracket(id)?;
        Ok(())
    }

    /// Changes the wall envelope.
    pub fn set_room(&mut self, room: RoomDimensions) {
        self.room = room;
    }

    /// Switches between the front and mounting views.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Shows or hides the eye-level guides.
    pub fn set_guides(&mut self, show: bool) {
        self.show_guides = show;
    }

    /// Shows or hides the camera guide.
    pub fn set_camera_visible(&mut self, show: bool) {
        self.show_camera = show;
    }

    /// Moves the camera; in video-conference mode the display follows it.
    pub fn set_camera_position(&mut self, position: CameraPosition) {
        self.camera_position = position;
        if self.scenario == ScenarioKind::VideoConference {
            self.apply_scenario();
        }
    }

    /// Flips the camera between above and below the display.
    pub fn toggle_camera_position(&mut self) {
        self.set_camera_position(self.camera_position.toggled());
    }

    fn apply_scenario(&mut self) {
        if self.scenario.is_manual() {
            return;
        }
        let height = self.dimensions.height;
        self.spec = if self.scenario == ScenarioKind::VideoConference {
            self.show_camera = true;
            self.camera_position.target_spec(height)
        } else {
            self.scenario.calculate_target(height)
        };
        debug!(
            scenario = %self.scenario,
            affl = self.spec.affl_value,
            reference = %self.spec.reference_point,
            "applied scenario target"
        );
    }

    /// Current layout.
    #[must_use]
    pub fn layout(&self) -> ElevationLayout {
        compute_elevation(&ElevationInput {
            dimensions: &self.dimensions,
            spec: self.spec,
            display_count: self.display_count,
            bracket: self.bracket,
            room: self.room,
            camera: self.show_camera.then_some(self.camera_position),
        })
    }

    /// Advisory findings for the current state.
    #[must_use]
    pub fn warnings(&self) -> Vec<ValidationWarning> {
        let mut warnings: Vec<ValidationWarning> = self
            .scenario
            .validate(
                self.spec.affl_value,
                self.dimensions.height,
                self.spec.reference_point,
            )
            .into_iter()
            .collect();

        let anchors = self.spec.anchors(self.dimensions.height);
        if anchors.bottom.value() < 0.0 {
            warnings.push(ValidationWarning::error(format!(
                "Bottom edge is {} below finished floor level.",
                Millimeters(-anchors.bottom.value())
            )));
        }
        if anchors.top.value() > self.room.height {
            warnings.push(ValidationWarning::error(format!(
                "Top edge ({}) is above the {} ceiling.",
                anchors.top,
                Millimeters(self.room.height)
            )));
        }

        for finding in &warnings {
            warn!(severity = %finding.severity, "{}", finding.message);
        }
        warnings
    }

    /// Selected preset id (`custom` after manual edits).
    #[must_use]
    pub fn preset_id(&self) -> &str {
        &self.preset_id
    }

    /// Current panel dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> &DisplayDimensions {
        &self.dimensions
    }

    /// Current installation spec.
    #[must_use]
    pub const fn spec(&self) -> InstallationSpec {
        self.spec
    }

    /// Selected scenario.
    #[must_use]
    pub const fn scenario(&self) -> ScenarioKind {
        self.scenario
    }

    /// Single or dual.
    #[must_use]
    pub const fn display_count(&self) -> DisplayCount {
        self.display_count
    }

    /// Selected bracket.
    #[must_use]
    pub const fn bracket(&self) -> &'static MountingBracket {
        self.bracket
    }

    /// Wall envelope.
    #[must_use]
    pub const fn room(&self) -> RoomDimensions {
        self.room
    }

    /// Current view.
    #[must_use]
    pub const fn view(&self) -> ViewMode {
        self.view
    }

    /// Whether eye-level guides are shown.
    #[must_use]
    pub const fn show_guides(&self) -> bool {
        self.show_guides
    }

    /// Whether the camera guide is shown.
    #[must_use]
    pub const fn show_camera(&self) -> bool {
        self.show_camera
    }

    /// Camera mounting position.
    #[must_use]
    pub const fn camera_position(&self) -> CameraPosition {
        self.camera_position
    }
}

/// State of the video-wall planner.
#[derive(Debug, Clone)]
pub struct VideoWallSession {
    config: WallConfiguration,
    room: RoomDimensions,
    view: ViewMode,
    show_guides: bool,
    flushboxes: Vec<Flushbox>,
    dimension_offsets: DimensionOffsets,
    rail_offsets: BTreeMap<u32, f64>,
    viewport: Viewport,
    drag: DragController,
}

impl Default for VideoWallSession {
    fn default() -> Self {
        let room = RoomDimensions::videowall_default();
        Self {
            config: WallConfiguration::default(),
            room,
            view: ViewMode::Front,
            show_guides: false,
            flushboxes: Vec::new(),
            dimension_offsets: DimensionOffsets::default(),
            rail_offsets: BTreeMap::new(),
            viewport: Viewport::new(room.width, room.height),
            drag: DragController::new(),
        }
    }
}

impl VideoWallSession {
    /// Creates a session with the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session using the configured room.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut session = Self::new();
        session.set_room(config.videowall.room());
        session
    }

    /// Sets the grid size.
    pub fn set_grid(&mut self, rows: u32, cols: u32) {
        self.config.rows = rows;
        self.config.cols = cols;
    }

    /// Sets the gap between panels.
    pub fn set_gap(&mut self, gap: f64) {
        self.config.gap = gap;
    }

    /// Sets the floor reference and its value.
    pub fn set_mounting(&mut self, reference: MountingReference, value: f64) {
        self.config.mounting_reference = reference;
        self.config.mounting_value = value;
    }

    /// Selects a catalog panel.
    pub fn select_display(&mut self, id: &str) -> Result<()> {
        self.config.display = WallDisplay::from(catalog::find_wall_display(id)?);
        Ok(())
    }

    /// Overrides the panel size; the panel becomes a custom one.
    pub fn set_display_size(&mut self, width: f64, height: f64) {
        let display = &mut self.config.display;
        display.id = CUSTOM_PRESET_ID.to_string();
        display.label = CUSTOM_DISPLAY_NAME.to_string();
        display.width = width;
        display.height = height;
    }

    /// Changes the room envelope.
    pub fn set_room(&mut self, room: RoomDimensions) {
        self.room = room;
        self.viewport.resize(room.width, room.height);
    }

    /// Switches between the front and mounting views.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Shows or hides the eye-level guides.
    pub fn set_guides(&mut self, show: bool) {
        self.show_guides = show;
    }

    /// Adds a flushbox at the next free default position.
    pub fn add_flushbox(&mut self) -> &Flushbox {
        let index = self.flushboxes.len();
        self.flushboxes.push(Flushbox::next(index));
        &self.flushboxes[index]
    }

    /// Moves a flushbox. Returns `false` for an unknown id.
    pub fn move_flushbox(&mut self, id: &str, x: f64, y: f64) -> bool {
        match self.flushboxes.iter_mut().find(|b| b.id == id) {
            Some(flushbox) => {
                flushbox.move_to(x, y);
                true
            }
            None => false,
        }
    }

    /// Horizontal offset of the Rail AFFL dimension for `row`.
    ///
    /// Rows without a dragged offset stagger leftward by 100 per row.
    #[must_use]
    pub fn rail_offset(&self, row: u32) -> f64 {
        self.rail_offsets
            .get(&row)
            .copied()
            .unwrap_or_else(|| -150.0 - f64::from(row) * 100.0)
    }

    /// Moves an AFFL dimension line.
    pub fn set_dimension_offset(&mut self, anchor: DimensionAnchor, offset: f64) {
        self.dimension_offsets.set(anchor, offset);
    }

    /// Moves a rail dimension line.
    pub fn set_rail_offset(&mut self, row: u32, offset: f64) {
        self.rail_offsets.insert(row, offset);
    }

    /// Starts a drag at `pointer`, replacing any drag in progress.
    ///
    /// Returns `false` when the target does not exist (unknown flushbox).
    pub fn begin_drag(&mut self, target: DragTarget, pointer: Point) -> bool {
        let origin = match &target {
            DragTarget::Pan => Point::default(),
            DragTarget::Flushbox(id) => match self.flushboxes.iter().find(|b| &b.id == id) {
                Some(flushbox) => Point::new(flushbox.x, flushbox.y),
                None => return false,
            },
            DragTarget::Dimension(anchor) => Point::new(self.dimension_offsets.get(*anchor), 0.0),
            DragTarget::Rail(row) => Point::new(self.rail_offset(*row), 0.0),
        };
        self.drag.begin(target, pointer, origin);
        true
    }

    /// Applies a pointer move to the drag in progress.
    pub fn drag_to(&mut self, pointer: Point) {
        let Some(update) = self.drag.drag_move(pointer, self.viewport.zoom()) else {
            return;
        };
        match update {
            DragUpdate::Pan { dx, dy } => self.viewport.pan_by(dx, dy),
            DragUpdate::Flushbox { id, x, y } => {
                self.move_flushbox(&id, x, y);
            }
            DragUpdate::Dimension { anchor, offset } => self.set_dimension_offset(anchor, offset),
            DragUpdate::Rail { row, offset } => self.set_rail_offset(row, offset),
        }
    }

    /// Releases the drag in progress.
    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Mutable access to zoom and pan.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Current layout.
    #[must_use]
    pub fn layout(&self) -> WallLayout {
        compute_wall_layout(&self.config, &self.room)
    }

    /// Size and floor heights of the array.
    #[must_use]
    pub fn dimensions(&self) -> WallDimensions {
        self.layout().dimensions()
    }

    /// Advisory findings for the current state.
    #[must_use]
    pub fn warnings(&self) -> Vec<ValidationWarning> {
        let warnings = room_fit_warnings(&self.layout(), &self.room);
        for finding in &warnings {
            warn!(severity = %finding.severity, "{}", finding.message);
        }
        warnings
    }

    /// Wall configuration.
    #[must_use]
    pub const fn config(&self) -> &WallConfiguration {
        &self.config
    }

    /// Room envelope.
    #[must_use]
    pub const fn room(&self) -> RoomDimensions {
        self.room
    }

    /// Current view.
    #[must_use]
    pub const fn view(&self) -> ViewMode {
        self.view
    }

    /// Whether eye-level guides are shown.
    #[must_use]
    pub const fn show_guides(&self) -> bool {
        self.show_guides
    }

    /// Flushboxes in creation order.
    #[must_use]
    pub fn flushboxes(&self) -> &[Flushbox] {
        &self.flushboxes
    }

    /// AFFL dimension offsets.
    #[must_use]
    pub const fn dimension_offsets(&self) -> DimensionOffsets {
        self.dimension_offsets
    }

    /// Zoom and pan.
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}
