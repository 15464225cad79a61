use std::collections::{HashMap, HashSet};

use crate::modules::folder::schema::FolderEntity;

/// Returns `root` plus the ids of every folder of `owner` reachable from it
/// through `parent_id` links.
///
/// Walks an explicit worklist; the visited set keeps the walk finite even if
/// the parent links ever form a cycle.
pub fn folder_closure(
    folders: &HashMap<String, FolderEntity>,
    owner: &str,
    root: &str,
) -> HashSet<String> {
    let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
    for folder in folders.values().filter(|f| f.owner == owner) {
        if let Some(parent) = folder.parent_id.as_deref() {
            children.entry(parent).or_default().push(folder.id.as_str());
        }
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        if !visited.insert(id.to_string()) {
            continue;
        }
        if let Some(kids) = children.get(id) {
            stack.extend(kids.iter().copied().filter(|k| !visited.contains(*k)));
        }
    }
    visited
}
