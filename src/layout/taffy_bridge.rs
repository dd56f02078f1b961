//! Taffy Bridge - Anchors from computed layout
//!
//! Reads a computed Taffy tree back into tooltip geometry. Taffy stores each
//! node's location relative to its parent, so the window position of an
//! anchor is the sum of locations up the parent chain.

use taffy::{NodeId, TaffyTree};

use crate::error::{Error, Result};
use crate::types::{Bounds, Point};

fn layout_error(node: NodeId, err: taffy::TaffyError) -> Error {
    Error::Layout(format!("node {:?}: {:?}", node, err))
}

/// Size of a computed node, at the origin.
pub fn bounds_of<T>(tree: &TaffyTree<T>, node: NodeId) -> Result<Bounds> {
    let layout = tree.layout(node).map_err(|e| layout_error(node, e))?;
    Ok(Bounds::from_size(layout.size.width, layout.size.height))
}

/// Window position of a computed node's top-left corner.
pub fn window_position<T>(tree: &TaffyTree<T>, node: NodeId) -> Result<Point> {
    let mut position = Point::ZERO;
    let mut current = Some(node);

    while let Some(id) = current {
        let layout = tree.layout(id).map_err(|e| layout_error(id, e))?;
        position = position.offset(layout.location.x, layout.location.y);
        current = tree.parent(id);
    }

    Ok(position)
}

/// Anchor bounds and window position in one lookup.
pub fn anchor_of<T>(tree: &TaffyTree<T>, node: NodeId) -> Result<(Bounds, Point)> {
    Ok((bounds_of(tree, node)?, window_position(tree, node)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use taffy::prelude::TaffyMaxContent;
    use taffy::{Dimension, LengthPercentage, Rect, Size, Style};

    fn fixed(width: f32, height: f32) -> Style {
        Style {
            size: Size {
                width: Dimension::Length(width),
                height: Dimension::Length(height),
            },
            ..Default::default()
        }
    }

    fn padded(left: f32, top: f32) -> Style {
        Style {
            padding: Rect {
                top: LengthPercentage::Length(top),
                right: LengthPercentage::Length(0.0),
                bottom: LengthPercentage::Length(0.0),
                left: LengthPercentage::Length(left),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_anchor_of_nested_node() {
        let mut tree: TaffyTree<()> = TaffyTree::new();
        let anchor = tree.new_leaf(fixed(10.0, 2.0)).unwrap();
        let inner = tree.new_with_children(padded(3.0, 1.0), &[anchor]).unwrap();
        let root = tree.new_with_children(padded(2.0, 4.0), &[inner]).unwrap();
        tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

        let (bounds, position) = anchor_of(&tree, anchor).unwrap();
        assert_eq!(bounds, Bounds::from_size(10.0, 2.0));
        // 2 + 3 padding left, 4 + 1 padding top
        assert_eq!(position, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_root_position_is_origin() {
        let mut tree: TaffyTree<()> = TaffyTree::new();
        let root = tree.new_leaf(fixed(80.0, 24.0)).unwrap();
        tree.compute_layout(root, Size::MAX_CONTENT).unwrap();

        assert_eq!(window_position(&tree, root).unwrap(), Point::ZERO);
        assert_eq!(bounds_of(&tree, root).unwrap().width(), 80.0);
    }
}
