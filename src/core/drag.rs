//! Drag interaction state machine
//!
//! Two gestures share one machine: dragging on empty timeline creates a
//! region from the selected labels, dragging an existing region translates
//! it rigidly. Each pointer event is fed through [`step`], which mutates the
//! region collection and reports what changed.
//!
//! ```text
//! Idle --press(background, labels selected)--> Creating --move*--> Creating --release--> Idle
//! Idle --press(region)-----------------------> Moving   --move*--> Moving   --release--> Idle
//! Creating/Moving --cancel--> Idle (create removed / move restored)
//! ```

use uuid::Uuid;

use crate::state::{Label, Region, RegionCollection};

/// What the pointer went down on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressTarget {
    /// Empty timeline area.
    Background,
    /// The body or an edge of an existing region.
    Region(Uuid),
}

/// Pointer input in timeline coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { x: f64, target: PressTarget },
    Move { x: f64 },
    Release { x: f64 },
    /// The gesture was interrupted (focus loss, escape).
    Cancel,
}

/// Gesture in progress. All per-gesture data lives in the variant and is
/// dropped when the machine returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Creating {
        region_id: Uuid,
        start: f64,
    },
    Moving {
        region_id: Uuid,
        /// Edge positions relative to the pointer at press time.
        cursor_offsets: [f64; 2],
        /// Edge positions at press time, restored on cancel.
        start_positions: [f64; 2],
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    /// Region the active gesture operates on.
    pub fn region_id(&self) -> Option<Uuid> {
        match self {
            DragState::Idle => None,
            DragState::Creating { region_id, .. } | DragState::Moving { region_id, .. } => {
                Some(*region_id)
            }
        }
    }
}

/// Change notification emitted by a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionChange {
    Created { id: Uuid },
    /// Intermediate update; `anchor` is where the label glyph goes.
    Changed { id: Uuid, bounds: (f64, f64), anchor: f64 },
    /// Final update of a gesture.
    ChangeFinished { id: Uuid, bounds: (f64, f64), anchor: f64 },
    /// A region being created was discarded.
    Removed { id: Uuid },
}

impl RegionChange {
    fn changed(region: &Region) -> Self {
        RegionChange::Changed {
            id: region.id,
            bounds: region.bounds(),
            anchor: region.label_anchor(),
        }
    }

    fn finished(region: &Region) -> Self {
        RegionChange::ChangeFinished {
            id: region.id,
            bounds: region.bounds(),
            anchor: region.label_anchor(),
        }
    }
}

/// Read-only inputs a step consults.
#[derive(Debug, Clone, Copy)]
pub struct DragContext<'a> {
    /// Selected labels in selection order.
    pub selected: &'a [&'a Label],
    /// Drag limits given to newly created regions.
    pub limits: (f64, f64),
}

/// Advance the machine by one pointer event.
pub fn step(
    state: DragState,
    event: PointerEvent,
    ctx: &DragContext<'_>,
    regions: &mut RegionCollection,
) -> (DragState, Vec<RegionChange>) {
    match (state, event) {
        (DragState::Idle, PointerEvent::Press { x, target }) => begin(x, target, ctx, regions),
        (DragState::Idle, _) => (DragState::Idle, Vec::new()),

        (DragState::Creating { region_id, start }, PointerEvent::Move { x }) => {
            match regions.get_mut(region_id) {
                Some(region) => {
                    region.set_bounds(start, x);
                    (state, vec![RegionChange::changed(region)])
                }
                None => abandon(region_id),
            }
        }
        (DragState::Creating { region_id, start }, PointerEvent::Release { x }) => {
            let Some(region) = regions.get_mut(region_id) else {
                return abandon(region_id);
            };
            region.set_bounds(start, x.max(0.0));
            region.selected = true;
            let change = RegionChange::finished(region);
            regions.raise(region_id);
            log::debug!("created region {} at {:?}", region_id, change);
            (DragState::Idle, vec![change])
        }
        (DragState::Creating { region_id, .. }, PointerEvent::Cancel) => {
            let changes = match regions.remove(region_id) {
                Some(_) => vec![RegionChange::Removed { id: region_id }],
                None => Vec::new(),
            };
            (DragState::Idle, changes)
        }

        (
            DragState::Moving {
                region_id,
                cursor_offsets,
                ..
            },
            PointerEvent::Move { x } | PointerEvent::Release { x },
        ) => {
            let Some(region) = regions.get_mut(region_id) else {
                return abandon(region_id);
            };
            region.set_edges(translate(cursor_offsets, x, region.limits()));
            if matches!(event, PointerEvent::Release { .. }) {
                (DragState::Idle, vec![RegionChange::finished(region)])
            } else {
                (state, vec![RegionChange::changed(region)])
            }
        }
        (
            DragState::Moving {
                region_id,
                start_positions,
                ..
            },
            PointerEvent::Cancel,
        ) => match regions.get_mut(region_id) {
            Some(region) => {
                region.set_edges(start_positions);
                (DragState::Idle, vec![RegionChange::finished(region)])
            }
            None => abandon(region_id),
        },

        // A second press while a gesture is active is ignored.
        (_, PointerEvent::Press { .. }) => (state, Vec::new()),
    }
}

fn begin(
    x: f64,
    target: PressTarget,
    ctx: &DragContext<'_>,
    regions: &mut RegionCollection,
) -> (DragState, Vec<RegionChange>) {
    match target {
        PressTarget::Background => {
            let start = x.max(0.0);
            let Some(mut region) = Region::from_labels(ctx.selected, (start, start)) else {
                return (DragState::Idle, Vec::new());
            };
            region.set_limits(ctx.limits.0, ctx.limits.1);
            let region_id = regions.push(region);
            (
                DragState::Creating { region_id, start },
                vec![RegionChange::Created { id: region_id }],
            )
        }
        PressTarget::Region(region_id) => match regions.get(region_id) {
            Some(region) => {
                let edges = region.edges();
                (
                    DragState::Moving {
                        region_id,
                        cursor_offsets: [edges[0] - x, edges[1] - x],
                        start_positions: edges,
                    },
                    Vec::new(),
                )
            }
            None => (DragState::Idle, Vec::new()),
        },
    }
}

fn abandon(region_id: Uuid) -> (DragState, Vec<RegionChange>) {
    log::warn!("region {} vanished during a drag", region_id);
    (DragState::Idle, Vec::new())
}

/// Candidate edge positions for a rigid translation.
///
/// Both edges move with the pointer. If the lower edge would pass the lower
/// limit both are shifted right by the deficit; if the upper edge would pass
/// the upper limit both are shifted left by the excess. The width is kept
/// whenever it fits between the limits.
pub fn translate(cursor_offsets: [f64; 2], pointer: f64, limits: (f64, f64)) -> [f64; 2] {
    let mut positions = cursor_offsets.map(|offset| offset + pointer);
    let low = if positions[0] <= positions[1] { 0 } else { 1 };
    let high = 1 - low;
    if positions[low] < limits.0 {
        let shift = limits.0 - positions[low];
        positions.iter_mut().for_each(|p| *p += shift);
    }
    if positions[high] > limits.1 {
        let shift = positions[high] - limits.1;
        positions.iter_mut().for_each(|p| *p -= shift);
    }
    positions
}
