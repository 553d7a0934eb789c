//! Hierarchical grouping of tensor names.
//!
//! Tensor names like `model.layers.0.attn.q_proj.weight` form an implicit
//! tree when split on `.`. [`TensorTree`] builds that tree and walks it
//! depth first, yielding [`TreeRow`] records (group headers and tensor
//! rows) that the output layer turns into table rows. The walk is an
//! iterator so callers can render, count or filter rows without the tree
//! knowing anything about tables.

use std::collections::BTreeMap;

use super::Tensor;

/// One row of the flattened tree view.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeRow<'a> {
    /// A synthetic header introducing a group of tensors.
    Group { depth: usize, path: String },
    /// A tensor, named relative to its enclosing group.
    Tensor {
        depth: usize,
        name: String,
        tensor: &'a Tensor,
    },
}

#[derive(Debug, Default)]
struct Node {
    /// Full dotted path of this group, empty for the root.
    path: String,
    /// Subgroups keyed by path segment; BTreeMap keeps them name-sorted.
    children: BTreeMap<String, Node>,
    /// Tensors directly in this group as (relative name, tensor index).
    tensors: Vec<(String, usize)>,
}

impl Node {
    /// Collect every tensor in this subtree with names relative to
    /// this node, sorted by name.
    fn subtree_tensors(&self, out: &mut Vec<(String, usize)>, prefix: &str) {
        for (name, index) in &self.tensors {
            out.push((format!("{prefix}{name}"), *index));
        }
        for (segment, child) in &self.children {
            child.subtree_tensors(out, &format!("{prefix}{segment}."));
        }
    }
}

/// A tree over a borrowed tensor list.
#[derive(Debug)]
pub struct TensorTree<'a> {
    tensors: &'a [Tensor],
    root: Node,
}

impl<'a> TensorTree<'a> {
    /// Group the given tensors by the dotted segments of their names.
    pub fn new(tensors: &'a [Tensor]) -> Self {
        let mut root = Node::default();
        for (index, tensor) in tensors.iter().enumerate() {
            let mut node = &mut root;
            let mut segments = tensor.name.split('.').peekable();
            while let Some(segment) = segments.next() {
                if segments.peek().is_none() {
                    node.tensors.push((segment.to_string(), index));
                } else {
                    let path = if node.path.is_empty() {
                        segment.to_string()
                    } else {
                        format!("{}.{}", node.path, segment)
                    };
                    node = node
                        .children
                        .entry(segment.to_string())
                        .or_insert_with(|| Node {
                            path,
                            ..Node::default()
                        });
                }
            }
        }
        sort_tensors(&mut root);
        TensorTree { tensors, root }
    }

    /// Merge groups that hold a single tensor and no subgroups into their
    /// parent, so `norm.weight` does not get a one-entry `norm` header.
    pub fn flatten_single_tensor_subnodes(&mut self) {
        flatten(&mut self.root);
    }

    /// Walk the tree depth first.
    ///
    /// `depth_limit` bounds how many levels of group headers are emitted;
    /// tensors below the limit are listed under the deepest visible group
    /// with correspondingly longer relative names. 0 means no limit.
    pub fn rows(&self, depth_limit: usize) -> Rows<'_, 'a> {
        Rows {
            tensors: self.tensors,
            depth_limit,
            stack: vec![Frame::expanded(&self.root, 0)],
        }
    }
}

fn sort_tensors(node: &mut Node) {
    node.tensors.sort_by(|a, b| a.0.cmp(&b.0));
    for child in node.children.values_mut() {
        sort_tensors(child);
    }
}

fn flatten(node: &mut Node) {
    for child in node.children.values_mut() {
        flatten(child);
    }
    let mut merged: Vec<String> = Vec::new();
    for (segment, child) in &node.children {
        if child.children.is_empty() && child.tensors.len() == 1 {
            merged.push(segment.clone());
        }
    }
    for segment in merged {
        if let Some(child) = node.children.remove(&segment) {
            for (name, index) in child.tensors {
                node.tensors.push((format!("{segment}.{name}"), index));
            }
        }
    }
    node.tensors.sort_by(|a, b| a.0.cmp(&b.0));
}

enum Entry<'t> {
    Tensor { name: String, index: usize },
    Group(&'t Node),
}

struct Frame<'t> {
    depth: usize,
    entries: std::vec::IntoIter<Entry<'t>>,
}

impl<'t> Frame<'t> {
    /// Tensors first, then subgroups, both already name-sorted.
    fn expanded(node: &'t Node, depth: usize) -> Self {
        let mut entries: Vec<Entry<'t>> = node
            .tensors
            .iter()
            .map(|(name, index)| Entry::Tensor {
                name: name.clone(),
                index: *index,
            })
            .collect();
        entries.extend(node.children.values().map(Entry::Group));
        Frame {
            depth,
            entries: entries.into_iter(),
        }
    }

    /// The whole subtree as flat tensor entries, for groups at the
    /// depth limit.
    fn collapsed(node: &'t Node, depth: usize) -> Self {
        let mut tensors = Vec::new();
        node.subtree_tensors(&mut tensors, "");
        tensors.sort_by(|a, b| a.0.cmp(&b.0));
        let entries: Vec<Entry<'t>> = tensors
            .into_iter()
            .map(|(name, index)| Entry::Tensor { name, index })
            .collect();
        Frame {
            depth,
            entries: entries.into_iter(),
        }
    }
}

/// Depth-first row iterator over a [`TensorTree`].
pub struct Rows<'t, 'a> {
    tensors: &'a [Tensor],
    depth_limit: usize,
    stack: Vec<Frame<'t>>,
}

impl<'t, 'a> Iterator for Rows<'t, 'a> {
    type Item = TreeRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let depth = frame.depth;
            match frame.entries.next() {
                Some(Entry::Tensor { name, index }) => {
                    return Some(TreeRow::Tensor {
                        depth,
                        name,
                        tensor: &self.tensors[index],
                    });
                }
                Some(Entry::Group(node)) => {
                    let child_depth = depth + 1;
                    let frame = if self.depth_limit > 0 && child_depth >= self.depth_limit {
                        Frame::collapsed(node, child_depth)
                    } else {
                        Frame::expanded(node, child_depth)
                    };
                    self.stack.push(frame);
                    return Some(TreeRow::Group {
                        depth,
                        path: node.path.clone(),
                    });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
