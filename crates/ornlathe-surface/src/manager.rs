//! The surface orchestrator: one mesh, rebuilt from the outline and
//! the ordered cut list.

use std::sync::Mutex;

use ornlathe_cutter::Cutter;
use serde::{Deserialize, Serialize};

use crate::mesh::RevolvedMesh;
use crate::outline::OutlineCurve;

/// One programmed cut: a cutter and its spindle position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutPoint {
    /// The cutter making this cut.
    pub cutter: Cutter,
    /// Radial cutter position.
    pub x: f64,
    /// Axial cutter position.
    pub z: f64,
    /// Disabled cuts stay in the list but are skipped during rebuild.
    pub enabled: bool,
}

impl CutPoint {
    /// An enabled cut at `(x, z)`.
    pub fn new(cutter: Cutter, x: f64, z: f64) -> Self {
        Self {
            cutter,
            x,
            z,
            enabled: true,
        }
    }

    /// Run this cut's full engagement against the mesh.
    pub fn apply_to(&self, mesh: &mut RevolvedMesh) {
        mesh.engage(&self.cutter, self.x, self.z);
    }
}

/// Notification payload sent to subscribers after each rebuild.
#[derive(Debug, Clone, PartialEq)]
pub struct RebuildEvent {
    /// The outline the mesh was revolved from.
    pub outline: OutlineCurve,
    /// Whether the inside outline was used.
    pub inside: bool,
    /// How many cuts were applied.
    pub cuts_applied: usize,
}

type Listener = Box<dyn Fn(&RebuildEvent) + Send>;

/// Owns the revolved surface and keeps it consistent with the outline
/// and cut list.
///
/// The dependency graph is explicit and acyclic: the document layer
/// pushes outline and cut-list changes in, renderers subscribe to a
/// plain callback. `rebuild` is the sole mesh mutator; the mesh sits
/// behind a mutex because renderers read it while edits trigger
/// rebuilds. All rebuilds run synchronously on the caller's thread;
/// callers debounce invocation frequency.
pub struct SurfaceManager {
    outline: OutlineCurve,
    cuts: Vec<CutPoint>,
    inside: bool,
    render_cuts: bool,
    mesh: Mutex<RevolvedMesh>,
    listeners: Vec<Listener>,
}

impl SurfaceManager {
    /// A manager with no outline yet: the mesh starts empty, which is a
    /// valid renderable state.
    pub fn new() -> Self {
        Self {
            outline: OutlineCurve::default(),
            cuts: Vec::new(),
            inside: false,
            render_cuts: true,
            mesh: Mutex::new(RevolvedMesh::empty(false)),
            listeners: Vec::new(),
        }
    }

    /// Replace the outline and rebuild.
    ///
    /// Notifications tagged as an in-progress drag only store the new
    /// curve; the rebuild happens when the drag ends.
    pub fn set_outline(&mut self, outline: OutlineCurve, in_progress: bool) {
        self.outline = outline;
        if !in_progress {
            self.rebuild();
        }
    }

    /// Replace the ordered cut list and rebuild.
    pub fn set_cuts(&mut self, cuts: Vec<CutPoint>) {
        self.cuts = cuts;
        self.rebuild();
    }

    /// Switch between the inside and outside surface. Setting the
    /// current value is a no-op; no rebuild storm.
    pub fn set_inside(&mut self, inside: bool) {
        if self.inside != inside {
            self.inside = inside;
            self.rebuild();
        }
    }

    /// Toggle whether cuts are applied during rebuild. Setting the
    /// current value is a no-op.
    pub fn set_render(&mut self, render_cuts: bool) {
        if self.render_cuts != render_cuts {
            self.render_cuts = render_cuts;
            self.rebuild();
        }
    }

    /// Register a rebuild callback.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&RebuildEvent) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Throw away the mesh and rebuild it: a clean revolution of the
    /// outline, then every enabled cut in document order. Later cuts
    /// see the deformation left by earlier ones; the list order is the
    /// material-removal order.
    pub fn rebuild(&mut self) {
        let mut fresh = RevolvedMesh::build_clean(&self.outline, self.inside);
        let mut cuts_applied = 0;
        if self.render_cuts {
            for cut in &self.cuts {
                if cut.enabled {
                    cut.apply_to(&mut fresh);
                    cuts_applied += 1;
                }
            }
        }
        log::debug!(
            "rebuilt surface: {} curve points, {} cuts applied",
            fresh.len(),
            cuts_applied
        );

        let event = RebuildEvent {
            outline: self.outline.clone(),
            inside: self.inside,
            cuts_applied,
        };
        // Critical section: swap the finished mesh in whole.
        *self.lock_mesh() = fresh;

        for listener in &self.listeners {
            listener(&event);
        }
    }

    /// Read the current mesh under the lock.
    pub fn with_mesh<R>(&self, f: impl FnOnce(&RevolvedMesh) -> R) -> R {
        f(&self.lock_mesh())
    }

    fn lock_mesh(&self) -> std::sync::MutexGuard<'_, RevolvedMesh> {
        match self.mesh.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for SurfaceManager {
    fn default() -> Self {
        Self::new()
    }
}
