//! Nested category tree built from flat `parent_id` rows

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::entities::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub id: i64,
    pub name: String,
    pub children: Vec<CategoryNode>,
}

/// Categories indexed by parent. Every category appears exactly once in
/// [`CategoryTree::roots`], even when the stored parent links form a cycle.
#[derive(Debug, Clone, Default)]
pub struct CategoryTree {
    by_id: HashMap<i64, Category>,
    children: HashMap<i64, Vec<i64>>,
    roots: Vec<i64>,
}

impl CategoryTree {
    pub fn build(categories: Vec<Category>) -> Self {
        let by_id: HashMap<i64, Category> =
            categories.into_iter().map(|c| (c.id, c)).collect();

        let mut children: HashMap<i64, Vec<i64>> = HashMap::new();
        let mut roots = Vec::new();

        for category in by_id.values() {
            match category.parent_id {
                // Dangling parent references are promoted to roots
                Some(parent) if parent != category.id && by_id.contains_key(&parent) => {
                    children.entry(parent).or_default().push(category.id);
                }
                _ => roots.push(category.id),
            }
        }

        let mut tree = Self {
            by_id,
            children,
            roots,
        };
        tree.sort_ids();
        tree
    }

    fn sort_ids(&mut self) {
        let by_id = &self.by_id;
        let key = |id: &i64| (by_id[id].name.clone(), *id);
        self.roots.sort_by_key(key);
        for ids in self.children.values_mut() {
            ids.sort_by_key(key);
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// The whole forest. Members of parent cycles that no root reaches are
    /// attached under the cycle member with the lowest id.
    pub fn roots(&self) -> Vec<CategoryNode> {
        let mut visited = HashSet::new();
        let mut nodes: Vec<CategoryNode> = self
            .roots
            .iter()
            .map(|id| self.node(*id, &mut visited))
            .collect();

        let orphans: BTreeSet<i64> = self
            .by_id
            .keys()
            .filter(|id| !visited.contains(*id))
            .copied()
            .collect();
        for id in &orphans {
            if !visited.contains(id) {
                nodes.push(self.node(*id, &mut visited));
            }
        }

        nodes
    }

    /// Subtree rooted at `id`, or `None` for an unknown category
    pub fn subtree(&self, id: i64) -> Option<CategoryNode> {
        if !self.by_id.contains_key(&id) {
            return None;
        }
        let mut visited = HashSet::new();
        Some(self.node(id, &mut visited))
    }

    /// Depth-first build with an explicit stack of unfinished ancestors
    fn node(&self, id: i64, visited: &mut HashSet<i64>) -> CategoryNode {
        visited.insert(id);
        let mut current = (self.leaf(id), self.child_ids(id));
        let mut ancestors = Vec::new();

        loop {
            // Children already claimed through a parent cycle are skipped
            if let Some(&child) = current.1.find(|c| !visited.contains(*c)) {
                visited.insert(child);
                let next = (self.leaf(child), self.child_ids(child));
                ancestors.push(std::mem::replace(&mut current, next));
                continue;
            }

            match ancestors.pop() {
                Some(mut parent) => {
                    parent.0.children.push(current.0);
                    current = parent;
                }
                None => return current.0,
            }
        }
    }

    fn leaf(&self, id: i64) -> CategoryNode {
        CategoryNode {
            id,
            name: self.by_id[&id].name.clone(),
            children: Vec::new(),
        }
    }

    fn child_ids(&self, id: i64) -> std::slice::Iter<'_, i64> {
        self.children.get(&id).map_or(&[][..], Vec::as_slice).iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(nodes: &[CategoryNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.name.as_str()).collect()
    }

    fn count_nodes(nodes: &[CategoryNode]) -> usize {
        let mut pending: Vec<&CategoryNode> = nodes.iter().collect();
        let mut count = 0;
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    #[test]
    fn test_builds_nested_tree_sorted_by_name() {
        let tree = CategoryTree::build(vec![
            Category::new(1, "Furniture", None),
            Category::new(2, "Tables", Some(1)),
            Category::new(3, "Chairs", Some(1)),
            Category::new(4, "Garden", None),
            Category::new(5, "Stools", Some(3)),
        ]);

        let roots = tree.roots();
        assert_eq!(names(&roots), vec!["Furniture", "Garden"]);
        assert_eq!(names(&roots[0].children), vec!["Chairs", "Tables"]);
        assert_eq!(names(&roots[0].children[0].children), vec!["Stools"]);
        assert_eq!(count_nodes(&roots), 5);
    }

    #[test]
    fn test_dangling_parent_becomes_root() {
        let tree = CategoryTree::build(vec![
            Category::new(1, "Lamps", Some(99)),
            Category::new(2, "Desk lamps", Some(1)),
        ]);
        let roots = tree.roots();
        assert_eq!(names(&roots), vec!["Lamps"]);
        assert_eq!(roots[0].children.len(), 1);
    }

    #[test]
    fn test_self_parent_is_root() {
        let tree = CategoryTree::build(vec![Category::new(7, "Loop", Some(7))]);
        let roots = tree.roots();
        assert_eq!(roots.len(), 1);
        assert!(roots[0].children.is_empty());
    }

    #[test]
    fn test_cycle_members_appear_once() {
        let tree = CategoryTree::build(vec![
            Category::new(1, "A", Some(3)),
            Category::new(2, "B", Some(1)),
            Category::new(3, "C", Some(2)),
            Category::new(4, "Root", None),
        ]);

        let roots = tree.roots();
        assert_eq!(count_nodes(&roots), 4);
        assert_eq!(names(&roots), vec!["Root", "A"]);
        assert_eq!(roots[1].children[0].name, "B");
        assert_eq!(roots[1].children[0].children[0].name, "C");
        assert!(roots[1].children[0].children[0].children.is_empty());
    }

    #[test]
    fn test_subtree() {
        let tree = CategoryTree::build(vec![
            Category::new(1, "Furniture", None),
            Category::new(2, "Chairs", Some(1)),
            Category::new(3, "Stools", Some(2)),
        ]);

        let sub = tree.subtree(2).unwrap();
        assert_eq!(sub.name, "Chairs");
        assert_eq!(count_nodes(std::slice::from_ref(&sub)), 2);
        assert!(tree.subtree(42).is_none());
    }

    #[test]
    fn test_long_parent_chain() {
        let depth = 20_000;
        let categories = (1..=depth)
            .map(|id| Category::new(id, format!("Level {}", id), (id > 1).then(|| id - 1)))
            .collect();
        let tree = CategoryTree::build(categories);

        let sub = tree.subtree(depth - 1).unwrap();
        assert_eq!(sub.children[0].id, depth);

        let roots = tree.roots();
        assert_eq!(roots.len(), 1);
        let mut node = &roots[0];
        let mut levels = 1;
        while let Some(child) = node.children.first() {
            assert_eq!(child.id, node.id + 1);
            node = child;
            levels += 1;
        }
        assert_eq!(levels, depth);

        // Nested drop glue recurses; unwind by hand
        let mut pending = roots;
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }

    #[test]
    fn test_empty_tree() {
        let tree = CategoryTree::build(vec![]);
        assert!(tree.is_empty());
        assert!(tree.roots().is_empty());
    }
}
