use std::fmt::Write;

use crate::scene::{NodeId, Scene};

/// Indented outline of the subtree below `id`, one node per line.
///
/// ```text
/// NodeId(0@gen0) "root" size=[800, 600] actual=[800, 600]
///   NodeId(1@gen0) auto size=[40, 40] actual=[40, 40] invalid=Invalidation(POSITION)
/// ```
pub fn dump_tree(scene: &Scene, id: NodeId) -> String {
    let mut out = String::new();
    dump_node(scene, id, 0, &mut out);
    out
}

fn dump_node(scene: &Scene, id: NodeId, depth: usize, out: &mut String) {
    let Some(d) = scene.drawable(id) else {
        return;
    };

    let _ = write!(out, "{:indent$}{id:?}", "", indent = depth * 2);
    if let Some(name) = d.name() {
        let _ = write!(out, " {name:?}");
    }
    if scene.is_auto_size(id) {
        out.push_str(" auto");
        if scene.require_auto_size(id) {
            out.push_str("(pending)");
        }
    }
    let _ = write!(out, " size={} actual={}", d.size(), scene.actual_size(id));
    if !d.is_visible() {
        out.push_str(" hidden");
    }
    let invalid = scene.invalidation(id);
    if !invalid.is_empty() {
        let _ = write!(out, " invalid={invalid:?}");
    }
    out.push('\n');

    for &child in scene.children(id) {
        dump_node(scene, child, depth + 1, out);
    }
}
