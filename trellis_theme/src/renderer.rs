// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tick pipeline and the per-row render contract.

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::Rect;
use trellis_connector::{ChildGeometry, ConnectorInput, ConnectorScene, draw};
use trellis_measure::{Invalidations, MeasureMode, RowWatch, TimerId, Timers};
use trellis_tree::{
    Forest, GeometryTable, LabelContext, NodeId, Propagation, TreeNode, resolve_position,
};

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::expander::{ExpanderView, ToggleRequest};
use crate::row::{DndAdapters, DropEffect, RowClasses, RowContent, RowProps, RowView};

/// Reads the live rectangles of rendered rows.
///
/// `None` means the element is not mounted yet; that row is skipped for the tick.
pub trait RowProbes {
    /// Outer container of the row.
    fn container(&self, node: NodeId) -> Option<Rect>;
    /// Row content; its rectangle becomes the node's measured box.
    fn content(&self, node: NodeId) -> Option<Rect>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Cadence {
    Geometry,
    Connector,
}

#[derive(Clone, Debug)]
struct MountedRow {
    watch: RowWatch,
    geometry_timer: Option<TimerId>,
    connector_timer: Option<TimerId>,
    scene: Option<ConnectorScene>,
}

/// What one [`ThemeRenderer::tick`] did.
#[derive(Clone, Debug, Default)]
pub struct TickReport {
    /// Rows whose content box changed this tick.
    pub measured: Vec<NodeId>,
    /// Result of the propagation pass, if one ran.
    pub propagation: Option<Propagation>,
    /// Rows whose connector was redrawn.
    pub redrawn: Vec<NodeId>,
    /// Rows unmounted because their node left the forest.
    pub unmounted: Vec<NodeId>,
}

/// Headless theme for a tree widget.
///
/// The renderer keeps per-row state for every mounted row: the measurement
/// watch, two interval timers (geometry and connector), and the latest
/// connector scene. Geometry lives in a [`GeometryTable`] beside the host's
/// [`Forest`], never on the nodes themselves.
///
/// Hosts drive it with two calls:
///
/// - [`render_row`](Self::render_row) once per visible row, which mounts the
///   row on first use and returns its [`RowView`];
/// - [`tick`](Self::tick) with the current time, which measures, propagates,
///   and redraws whatever is due.
///
/// Rows that leave the screen must be [`unmount`](Self::unmount)ed so their
/// timers stop.
#[derive(Debug)]
pub struct ThemeRenderer {
    config: ThemeConfig,
    geometry: GeometryTable,
    rows: HashMap<NodeId, MountedRow>,
    timers: Timers<(NodeId, Cadence)>,
    invalidations: Invalidations<NodeId>,
    now: u64,
}

impl ThemeRenderer {
    /// A renderer with no mounted rows.
    pub fn new(config: ThemeConfig) -> Self {
        Self {
            config,
            geometry: GeometryTable::new(),
            rows: HashMap::new(),
            timers: Timers::new(),
            invalidations: Invalidations::new(),
            now: 0,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// The geometry overlay.
    pub fn geometry(&self) -> &GeometryTable {
        &self.geometry
    }

    /// Host clock as of the last tick.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Returns `true` if the row has been mounted and not unmounted since.
    pub fn is_mounted(&self, node: NodeId) -> bool {
        self.rows.contains_key(&node)
    }

    /// Number of running timers across all rows.
    pub fn active_timers(&self) -> usize {
        self.timers.len()
    }

    /// Latest connector scene of a row.
    pub fn scene(&self, node: NodeId) -> Option<&ConnectorScene> {
        self.rows.get(&node).and_then(|r| r.scene.as_ref())
    }

    /// Effective height of a row for the host's list.
    ///
    /// Mounted rows report the height recorded at their last render; other
    /// rows report their node's nominal height. Ids that are not in the
    /// forest report the configured default.
    pub fn row_height(&self, forest: &Forest, node: NodeId) -> f64 {
        match self.geometry.get(node) {
            Some(g) => g.row_height,
            None => forest.get(node).map_or(self.config.row_height, |n| n.height),
        }
    }

    /// Start tracking a row. Mounting twice is a no-op.
    pub fn mount(&mut self, node: NodeId, row_height: f64) {
        if self.rows.contains_key(&node) {
            return;
        }
        self.geometry.mount(node, row_height);
        let geometry_timer = match self.config.measure_mode {
            MeasureMode::Poll => Some(self.timers.start(
                (node, Cadence::Geometry),
                self.config.geometry_interval_ms,
                self.now,
            )),
            MeasureMode::Observe => {
                self.invalidations.notify(node);
                None
            }
        };
        self.rows.insert(
            node,
            MountedRow {
                watch: RowWatch::new(),
                geometry_timer,
                connector_timer: None,
                scene: None,
            },
        );
        log::debug!("mounted row {node:?}");
    }

    /// Stop tracking a row: cancel its timers and discard its geometry.
    ///
    /// Returns `false` if the row was not mounted.
    pub fn unmount(&mut self, node: NodeId) -> bool {
        let Some(row) = self.rows.remove(&node) else {
            return false;
        };
        for timer in [row.geometry_timer, row.connector_timer].into_iter().flatten() {
            self.timers.cancel(timer);
        }
        self.invalidations.forget(&node);
        self.geometry.unmount(node);
        log::debug!("unmounted row {node:?}");
        true
    }

    /// Unmount every row that is no longer visible or no longer exists.
    pub fn retain_visible(&mut self, forest: &Forest) {
        let visible: HashSet<NodeId> =
            forest.visible_rows().into_iter().map(|r| r.node).collect();
        let gone: Vec<NodeId> = self
            .rows
            .keys()
            .filter(|id| !visible.contains(*id))
            .copied()
            .collect();
        for id in gone {
            self.unmount(id);
        }
    }

    /// Report that a row's layout changed, from a host resize or mutation observer.
    ///
    /// The row is re-measured on the next tick whatever the measure mode.
    pub fn notify_layout_changed(&mut self, node: NodeId) {
        if self.rows.contains_key(&node) {
            self.invalidations.notify(node);
        }
    }

    /// Run everything that is due at `now`.
    ///
    /// Measurement comes first, then propagation, then connector redraws.
    /// Rows whose elements are not mounted yet are skipped.
    pub fn tick(&mut self, forest: &Forest, now: u64, probes: &impl RowProbes) -> TickReport {
        self.now = self.now.max(now);
        let mut report = TickReport::default();

        let mut to_measure = self.invalidations.drain();
        let mut to_draw = Vec::new();
        for (timer, (node, cadence)) in self.timers.due(self.now) {
            if report.unmounted.contains(&node) {
                continue;
            }
            if !forest.is_alive(node) {
                log::warn!("timer fired for removed node {node:?}; unmounting");
                self.timers.cancel(timer);
                self.unmount(node);
                to_measure.retain(|n| *n != node);
                to_draw.retain(|n| *n != node);
                report.unmounted.push(node);
                continue;
            }
            if !self.rows.contains_key(&node) {
                self.timers.cancel(timer);
                continue;
            }
            match cadence {
                Cadence::Geometry if !to_measure.contains(&node) => to_measure.push(node),
                Cadence::Geometry => {}
                Cadence::Connector => to_draw.push(node),
            }
        }

        for node in &to_measure {
            let Some(row) = self.rows.get_mut(node) else {
                continue;
            };
            let container = || probes.container(*node);
            let content = || probes.content(*node);
            let m = row.watch.poll(&container, &content);
            match m.content {
                Some(rect) => {
                    self.geometry.set_measured(*node, rect);
                    report.measured.push(*node);
                }
                None if !row.watch.is_loaded() => log::trace!("row {node:?} not mounted yet"),
                None => {}
            }
        }

        if !to_measure.is_empty() {
            report.propagation = Some(self.geometry.propagate(forest));
        }

        for node in to_draw {
            if let Some(scene) = self.draw_connector(forest, node) {
                if let Some(row) = self.rows.get_mut(&node) {
                    row.scene = Some(scene);
                }
                report.redrawn.push(node);
            }
        }

        report
    }

    fn draw_connector(&self, forest: &Forest, node: NodeId) -> Option<ConnectorScene> {
        let data = forest.get(node)?;
        if !data.children().has_children() {
            return None;
        }
        let Some(parent_box) = self.geometry.get(node).and_then(|g| g.bounding_box) else {
            log::trace!("connector for {node:?} skipped: row not measured yet");
            return None;
        };
        let children: Vec<ChildGeometry> = forest
            .children_of(node)
            .iter()
            .map(|&child| {
                let g = self.geometry.get(child);
                ChildGeometry {
                    parent_box: g.and_then(|g| g.parent_bounding_box),
                    measured_height: g.and_then(|g| g.measured).map(|r| r.height()),
                    nominal_height: forest.get(child).map_or(self.config.row_height, |c| c.height),
                }
            })
            .collect();
        let input = ConnectorInput {
            expanded: data.expanded,
            parent_box,
            children: &children,
        };
        draw(&input, &self.config.connector)
    }

    /// Render one visible row.
    ///
    /// Mounts the row on first use, records its nominal height, and keeps the
    /// connector timer running exactly while the node offers an expander.
    /// The host's drag adapters are applied to the content unmodified: the
    /// preview on every row, the source only when `props.can_drag`.
    pub fn render_row(
        &mut self,
        forest: &Forest,
        props: &RowProps,
        adapters: &mut (impl DndAdapters + ?Sized),
    ) -> Result<RowView, ThemeError> {
        if props.path.is_empty() {
            return Err(ThemeError::EmptyPath);
        }
        let node = forest
            .get(props.node)
            .ok_or(ThemeError::StaleNode(props.node))?;
        if forest.node_at(&props.path) != Some(props.node) {
            return Err(ThemeError::PathMismatch {
                node: props.node,
                path: props.path.clone(),
            });
        }

        self.mount(props.node, node.height);
        if let Some(g) = self.geometry.get_mut(props.node) {
            g.row_height = node.height;
        }

        let has_expander = props.can_toggle && node.children().has_children();
        self.sync_connector_timer(props.node, has_expander);

        let parent_box = self
            .geometry
            .get(props.node)
            .and_then(|g| g.parent_bounding_box);
        let placement = resolve_position(
            props.path.len(),
            parent_box,
            self.config.scaffold_width,
            &self.config.position,
        );

        let row = self.rows.get(&props.node);
        let loaded = row.is_some_and(|r| r.watch.is_loaded());
        let expander = (has_expander && loaded).then(|| ExpanderView {
            request: ToggleRequest {
                node: props.node,
                path: props.path.clone(),
                tree_index: props.tree_index,
            },
            expanded: node.expanded,
            button_right: -self.config.scaffold_width,
            scene: row.and_then(|r| r.scene.clone()),
            spacer_width: (node.expanded && !props.is_dragging)
                .then_some(self.config.scaffold_width),
        });

        let content = row_content(forest, node, props);
        let content = adapters.connect_drag_preview(content);
        let content = if props.can_drag {
            adapters.connect_drag_source(content, DropEffect::Copy)
        } else {
            content
        };

        Ok(RowView {
            node: props.node,
            placement,
            expander,
            content,
        })
    }

    fn sync_connector_timer(&mut self, node: NodeId, wanted: bool) {
        let Some(row) = self.rows.get_mut(&node) else {
            return;
        };
        match (wanted, row.connector_timer) {
            (true, None) => {
                row.connector_timer = Some(self.timers.start(
                    (node, Cadence::Connector),
                    self.config.connector_interval_ms,
                    self.now,
                ));
            }
            (false, Some(timer)) => {
                self.timers.cancel(timer);
                row.connector_timer = None;
                row.scene = None;
            }
            _ => {}
        }
    }
}

fn row_content(forest: &Forest, node: &TreeNode, props: &RowProps) -> RowContent {
    let cx = LabelContext {
        node: props.node,
        path: &props.path,
        tree_index: props.tree_index,
    };
    let title = props.title.as_ref().unwrap_or(&node.title).resolve(&cx);
    let subtitle = props
        .subtitle
        .as_ref()
        .or(node.subtitle.as_ref())
        .map(|s| s.resolve(&cx));

    let landing = !props.did_drop && props.is_dragging;
    let mut classes = RowClasses::empty();
    classes.set(RowClasses::LANDING_PAD, landing);
    classes.set(RowClasses::CANCEL_PAD, landing && !props.can_drop);
    classes.set(RowClasses::SEARCH_MATCH, props.is_search_match);
    classes.set(RowClasses::SEARCH_FOCUS, props.is_search_focus);
    classes.set(RowClasses::DRAG_DISABLED, !props.can_drag);

    let dragged_descendant = props
        .dragged_node
        .is_some_and(|dragged| forest.is_descendant(dragged, props.node));

    RowContent {
        title,
        subtitle,
        classes,
        class_name: props.class_name.clone(),
        buttons: props.buttons.clone(),
        opacity: if dragged_descendant { 0.5 } else { 1.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::{ButtonId, NoDnd};
    use alloc::format;
    use alloc::string::String;
    use kurbo::Point;
    use trellis_tree::{Label, Placement, TreePath};

    #[derive(Default)]
    struct Boxes(HashMap<NodeId, Rect>);

    impl RowProbes for Boxes {
        fn container(&self, node: NodeId) -> Option<Rect> {
            self.0.get(&node).copied()
        }

        fn content(&self, node: NodeId) -> Option<Rect> {
            self.0.get(&node).copied()
        }
    }

    fn props(forest: &Forest, node: NodeId, tree_index: usize) -> RowProps {
        RowProps::new(node, forest.path_of(node).unwrap(), tree_index)
    }

    fn parent_and_child() -> (Forest, NodeId, NodeId) {
        let mut f = Forest::new();
        let a = f.insert(None, TreeNode::new("A").with_expanded(true));
        let b = f.insert(Some(a), TreeNode::new("B"));
        (f, a, b)
    }

    #[test]
    fn child_is_placed_once_parent_is_measured() {
        let (f, a, b) = parent_and_child();
        let mut r = ThemeRenderer::new(ThemeConfig::default());

        let view_a = r.render_row(&f, &props(&f, a, 0), &mut NoDnd).unwrap();
        let view_b = r.render_row(&f, &props(&f, b, 1), &mut NoDnd).unwrap();
        assert_eq!(view_a.placement, Placement::Flow);
        assert_eq!(view_b.placement, Placement::Flow);
        assert!(view_a.expander.is_none(), "no expander before first measurement");
        // Geometry for both rows, connector for A.
        assert_eq!(r.active_timers(), 3);

        let mut boxes = Boxes::default();
        boxes.0.insert(a, Rect::new(0.0, 0.0, 120.0, 60.0));
        boxes.0.insert(b, Rect::new(0.0, 0.0, 100.0, 60.0));
        let report = r.tick(&f, 10, &boxes);
        assert_eq!(report.measured, [a, b]);
        assert!(report.propagation.is_some());
        assert!(report.redrawn.is_empty());

        let view_b = r.render_row(&f, &props(&f, b, 1), &mut NoDnd).unwrap();
        assert_eq!(view_b.placement, Placement::Absolute(Point::new(106.0, -60.0)));

        let view_a = r.render_row(&f, &props(&f, a, 0), &mut NoDnd).unwrap();
        let expander = view_a.expander.unwrap();
        assert!(expander.expanded);
        assert_eq!(expander.aria_label(), "Collapse");
        assert_eq!(expander.button_right, -44.0);
        assert_eq!(expander.spacer_width, Some(44.0));
        assert!(expander.scene.is_none());

        let report = r.tick(&f, 100, &boxes);
        assert!(report.measured.is_empty(), "unchanged boxes are not republished");
        assert_eq!(report.redrawn, [a]);
        let view_a = r.render_row(&f, &props(&f, a, 0), &mut NoDnd).unwrap();
        assert!(view_a.expander.unwrap().scene.is_some());
    }

    #[test]
    fn malformed_rows_are_rejected() {
        let (mut f, a, b) = parent_and_child();
        let mut r = ThemeRenderer::new(ThemeConfig::default());

        let empty = RowProps::new(a, TreePath::new(), 0);
        assert_eq!(r.render_row(&f, &empty, &mut NoDnd), Err(ThemeError::EmptyPath));

        let wrong = RowProps::new(b, f.path_of(a).unwrap(), 0);
        assert!(matches!(
            r.render_row(&f, &wrong, &mut NoDnd),
            Err(ThemeError::PathMismatch { node, .. }) if node == b
        ));

        let path = f.path_of(b).unwrap();
        f.remove(b);
        let stale = RowProps::new(b, path, 1);
        assert_eq!(r.render_row(&f, &stale, &mut NoDnd), Err(ThemeError::StaleNode(b)));
        assert!(!r.is_mounted(b));
    }

    #[test]
    fn empty_children_show_no_expander() {
        let mut f = Forest::new();
        let a = f.insert(None, TreeNode::new("A").with_empty_children().with_expanded(true));
        let mut r = ThemeRenderer::new(ThemeConfig::default());
        r.render_row(&f, &props(&f, a, 0), &mut NoDnd).unwrap();
        assert_eq!(r.active_timers(), 1);

        let mut boxes = Boxes::default();
        boxes.0.insert(a, Rect::new(0.0, 0.0, 120.0, 60.0));
        r.tick(&f, 10, &boxes);
        let view = r.render_row(&f, &props(&f, a, 0), &mut NoDnd).unwrap();
        assert!(view.expander.is_none());
    }

    #[test]
    fn without_toggle_the_connector_timer_stops() {
        let (f, a, _) = parent_and_child();
        let mut r = ThemeRenderer::new(ThemeConfig::default());
        r.render_row(&f, &props(&f, a, 0), &mut NoDnd).unwrap();
        assert_eq!(r.active_timers(), 2);

        let mut p = props(&f, a, 0);
        p.can_toggle = false;
        let view = r.render_row(&f, &p, &mut NoDnd).unwrap();
        assert!(view.expander.is_none());
        assert_eq!(r.active_timers(), 1);
    }

    #[test]
    fn drag_state_maps_to_classes_and_opacity() {
        let (f, a, b) = parent_and_child();
        let mut r = ThemeRenderer::new(ThemeConfig::default());

        let mut p = props(&f, b, 1);
        p.is_dragging = true;
        p.dragged_node = Some(a);
        let view = r.render_row(&f, &p, &mut NoDnd).unwrap();
        assert_eq!(
            view.content.classes,
            RowClasses::LANDING_PAD | RowClasses::CANCEL_PAD | RowClasses::DRAG_DISABLED
        );
        assert_eq!(view.content.opacity, 0.5);

        p.can_drop = true;
        p.can_drag = true;
        p.is_search_focus = true;
        p.dragged_node = Some(b);
        let view = r.render_row(&f, &p, &mut NoDnd).unwrap();
        assert_eq!(
            view.content.classes,
            RowClasses::LANDING_PAD | RowClasses::SEARCH_FOCUS
        );
        assert_eq!(view.content.opacity, 1.0, "a row is not inside its own drag");

        p.did_drop = true;
        let view = r.render_row(&f, &p, &mut NoDnd).unwrap();
        assert!(!view.content.classes.contains(RowClasses::LANDING_PAD));
    }

    #[test]
    fn adapter_output_is_used_unchanged() {
        #[derive(Default)]
        struct Tagging {
            sources: Vec<DropEffect>,
        }

        impl DndAdapters for Tagging {
            fn connect_drag_preview(&mut self, mut content: RowContent) -> RowContent {
                content.title.push_str(" [preview]");
                content
            }

            fn connect_drag_source(
                &mut self,
                mut content: RowContent,
                effect: DropEffect,
            ) -> RowContent {
                self.sources.push(effect);
                content.class_name = Some(String::from("source"));
                content
            }
        }

        let (f, a, _) = parent_and_child();
        let mut r = ThemeRenderer::new(ThemeConfig::default());
        let mut dnd = Tagging::default();

        let view = r.render_row(&f, &props(&f, a, 0), &mut dnd).unwrap();
        assert_eq!(view.content.title, "A [preview]");
        assert_eq!(view.content.class_name, None);
        assert!(dnd.sources.is_empty());

        let mut p = props(&f, a, 0);
        p.can_drag = true;
        let view = r.render_row(&f, &p, &mut dnd).unwrap();
        assert_eq!(view.content.class_name.as_deref(), Some("source"));
        assert_eq!(dnd.sources, [DropEffect::Copy]);
    }

    #[test]
    fn labels_resolve_against_the_row() {
        let (f, a, b) = parent_and_child();
        let mut r = ThemeRenderer::new(ThemeConfig::default());
        let mut p = props(&f, b, 1);
        p.title = Some(Label::computed(|cx| format!("row {} at {:?}", cx.tree_index, cx.path)));
        p.subtitle = Some("override".into());
        let view = r.render_row(&f, &p, &mut NoDnd).unwrap();
        assert_eq!(view.content.title, "row 1 at [0, 0]");
        assert_eq!(view.content.subtitle.as_deref(), Some("override"));

        let view = r.render_row(&f, &props(&f, a, 0), &mut NoDnd).unwrap();
        assert_eq!(view.content.title, "A");
        assert_eq!(view.content.subtitle, None);
        assert!(view.content.buttons.is_empty());
    }

    #[test]
    fn toolbar_buttons_pass_through_in_order() {
        let (f, a, _) = parent_and_child();
        let mut r = ThemeRenderer::new(ThemeConfig::default());
        let mut p = props(&f, a, 0);
        p.buttons = alloc::vec![ButtonId(7), ButtonId(2), ButtonId(7)];
        let view = r.render_row(&f, &p, &mut NoDnd).unwrap();
        assert_eq!(view.content.buttons, [ButtonId(7), ButtonId(2), ButtonId(7)]);
    }

    #[test]
    fn unmount_cancels_timers_and_forgets_geometry() {
        let (mut f, a, b) = parent_and_child();
        let mut r = ThemeRenderer::new(ThemeConfig::default());
        r.render_row(&f, &props(&f, a, 0), &mut NoDnd).unwrap();
        r.render_row(&f, &props(&f, b, 1), &mut NoDnd).unwrap();
        assert_eq!(r.active_timers(), 3);

        f.toggle_expanded(a);
        r.retain_visible(&f);
        assert!(!r.is_mounted(b));
        assert!(r.geometry().get(b).is_none());
        assert_eq!(r.active_timers(), 2);

        assert!(r.unmount(a));
        assert!(!r.unmount(a));
        assert_eq!(r.active_timers(), 0);
        assert_eq!(r.row_height(&f, a), 62.0);
    }

    #[test]
    fn removed_node_is_unmounted_when_its_timer_fires() {
        let (mut f, a, b) = parent_and_child();
        let mut r = ThemeRenderer::new(ThemeConfig::default());
        r.render_row(&f, &props(&f, b, 1), &mut NoDnd).unwrap();
        f.remove(b);

        let mut boxes = Boxes::default();
        boxes.0.insert(b, Rect::new(0.0, 0.0, 100.0, 60.0));
        let report = r.tick(&f, 10, &boxes);
        assert!(report.measured.is_empty());
        assert_eq!(report.unmounted, [b]);
        assert!(!r.is_mounted(b));
        assert_eq!(r.active_timers(), 0);
        assert!(r.render_row(&f, &props(&f, a, 0), &mut NoDnd).is_ok());
    }

    #[test]
    fn removed_row_with_two_due_timers_is_handled_once() {
        let (mut f, _, b) = parent_and_child();
        let c = f.insert(Some(b), TreeNode::new("C"));
        let mut r = ThemeRenderer::new(ThemeConfig::default());
        r.render_row(&f, &props(&f, b, 1), &mut NoDnd).unwrap();
        r.render_row(&f, &props(&f, c, 2), &mut NoDnd).unwrap();
        assert_eq!(r.active_timers(), 3);
        f.remove(b);

        // Geometry and connector timers of B are both due at 100.
        let report = r.tick(&f, 100, &Boxes::default());
        assert_eq!(report.unmounted, [b, c]);
        assert!(report.redrawn.is_empty());
        assert_eq!(r.active_timers(), 0);
        assert!(!r.is_mounted(c));
    }

    #[test]
    fn observe_mode_measures_on_notification() {
        let mut f = Forest::new();
        let a = f.insert(None, TreeNode::new("A").with_height(40.0));
        let config = ThemeConfig {
            measure_mode: MeasureMode::Observe,
            ..ThemeConfig::default()
        };
        let mut r = ThemeRenderer::new(config);
        r.render_row(&f, &props(&f, a, 0), &mut NoDnd).unwrap();
        assert_eq!(r.active_timers(), 0);
        assert_eq!(r.row_height(&f, a), 40.0);

        let mut boxes = Boxes::default();
        boxes.0.insert(a, Rect::new(0.0, 0.0, 120.0, 40.0));
        assert_eq!(r.tick(&f, 5, &boxes).measured, [a]);

        boxes.0.insert(a, Rect::new(0.0, 0.0, 150.0, 40.0));
        assert!(r.tick(&f, 50, &boxes).measured.is_empty());

        r.notify_layout_changed(a);
        assert_eq!(r.tick(&f, 51, &boxes).measured, [a]);
        assert_eq!(
            r.geometry().get(a).unwrap().measured,
            Some(Rect::new(0.0, 0.0, 150.0, 40.0))
        );
    }

    #[test]
    fn unmounted_elements_are_skipped() {
        let (f, a, _) = parent_and_child();
        let mut r = ThemeRenderer::new(ThemeConfig::default());
        r.render_row(&f, &props(&f, a, 0), &mut NoDnd).unwrap();
        let report = r.tick(&f, 10, &Boxes::default());
        assert!(report.measured.is_empty());
        let report = r.tick(&f, 100, &Boxes::default());
        assert!(report.redrawn.is_empty(), "connector waits for a measured row");
    }
}
