//! Shared types for the splitter subsystem.

use bitflags::bitflags;

use crate::tree::NodeId;

/// Default splitter thickness in layout units.
pub const DEFAULT_THICKNESS: f32 = 4.0;

/// Drag threshold in layout units before a drag gesture activates.
pub const DRAG_THRESHOLD: f32 = 5.0;

/// Placement side of a child within a dock panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DockSide {
    Left,
    Top,
    Right,
    Bottom,
    /// Take the space left over after docked siblings have carved theirs.
    #[default]
    Fill,
}

impl DockSide {
    /// Orientation of a splitter docked on this side.
    ///
    /// Top/Bottom handles lie horizontally and control vertical extent;
    /// every other side (Fill included) yields a vertical handle.
    pub fn orientation(&self) -> Orientation {
        match self {
            DockSide::Top | DockSide::Bottom => Orientation::Horizontal,
            DockSide::Left | DockSide::Right | DockSide::Fill => Orientation::Vertical,
        }
    }

    /// Whether a drag delta must be sign-inverted for this side.
    ///
    /// A sibling anchored at the far edge grows when the handle moves
    /// toward the container's center, which is the negative direction of
    /// the reported delta.
    pub fn inverts_drag(&self) -> bool {
        matches!(self, DockSide::Bottom | DockSide::Right)
    }
}

/// Orientation of a splitter handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Handle lies horizontally and resizes along the vertical axis.
    Horizontal,
    /// Handle lies vertically and resizes along the horizontal axis.
    Vertical,
}

impl Orientation {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    /// The pointer shape advertised while over the handle.
    pub fn cursor(&self) -> CursorShape {
        match self {
            Orientation::Horizontal => CursorShape::RowResize,
            Orientation::Vertical => CursorShape::ColResize,
        }
    }

    /// The style class advertised for this orientation.
    pub fn class(&self) -> SplitterClasses {
        match self {
            Orientation::Horizontal => SplitterClasses::HORIZONTAL,
            Orientation::Vertical => SplitterClasses::VERTICAL,
        }
    }
}

/// Pointer shape shown over a splitter handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    /// North-south resize arrows.
    RowResize,
    /// West-east resize arrows.
    ColResize,
}

#[cfg(feature = "winit")]
impl From<CursorShape> for winit::window::CursorIcon {
    fn from(shape: CursorShape) -> Self {
        match shape {
            CursorShape::RowResize => winit::window::CursorIcon::RowResize,
            CursorShape::ColResize => winit::window::CursorIcon::ColResize,
        }
    }
}

bitflags! {
    /// Style tags a host theme can select on.
    ///
    /// `HORIZONTAL` and `VERTICAL` are mutually exclusive; attachment sets
    /// one and clears the other.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SplitterClasses: u8 {
        const HORIZONTAL = 0b001;
        const VERTICAL   = 0b010;
        const DRAGGING   = 0b100;
    }
}

impl SplitterClasses {
    /// Replace the orientation class, leaving other tags untouched.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.remove(Self::HORIZONTAL | Self::VERTICAL);
        self.insert(orientation.class());
    }
}

/// How a splitter occupies a position in its panel's child list.
///
/// Resolved once at attach time; a templated tree wraps each child in a
/// one-child presenter, in which case placement (dock side, child index)
/// is read through the wrapper rather than the splitter itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildSlot {
    /// The splitter is a direct child of the panel.
    Direct(NodeId),
    /// The splitter is the content of a presenter that is the panel's child.
    Wrapped {
        /// The wrapping presenter node.
        presenter: NodeId,
    },
}

impl ChildSlot {
    /// The node that occupies a position in the panel's child list.
    pub fn position_node(&self) -> NodeId {
        match *self {
            ChildSlot::Direct(node) => node,
            ChildSlot::Wrapped { presenter } => presenter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_by_side() {
        assert_eq!(DockSide::Top.orientation(), Orientation::Horizontal);
        assert_eq!(DockSide::Bottom.orientation(), Orientation::Horizontal);
        assert_eq!(DockSide::Left.orientation(), Orientation::Vertical);
        assert_eq!(DockSide::Right.orientation(), Orientation::Vertical);
        assert_eq!(DockSide::Fill.orientation(), Orientation::Vertical);
    }

    #[test]
    fn test_sign_inversion_sides() {
        assert!(DockSide::Bottom.inverts_drag());
        assert!(DockSide::Right.inverts_drag());
        assert!(!DockSide::Top.inverts_drag());
        assert!(!DockSide::Left.inverts_drag());
        assert!(!DockSide::Fill.inverts_drag());
    }

    #[test]
    fn test_orientation_classes_exclusive() {
        let mut classes = SplitterClasses::DRAGGING;
        classes.set_orientation(Orientation::Horizontal);
        assert!(classes.contains(SplitterClasses::HORIZONTAL));
        assert!(!classes.contains(SplitterClasses::VERTICAL));

        classes.set_orientation(Orientation::Vertical);
        assert!(classes.contains(SplitterClasses::VERTICAL));
        assert!(!classes.contains(SplitterClasses::HORIZONTAL));
        assert!(classes.contains(SplitterClasses::DRAGGING));
    }

    #[test]
    fn test_cursor_by_orientation() {
        assert_eq!(Orientation::Horizontal.cursor(), CursorShape::RowResize);
        assert_eq!(Orientation::Vertical.cursor(), CursorShape::ColResize);
    }
}
