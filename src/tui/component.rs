use ratatui::{buffer::Buffer, layout::Rect};
use std::time::Duration;

use super::action::Action;
use crate::config::DisplayConfig;
use crate::selection::DateRange;

/// Core component trait - like React.Component
///
/// Components are the building blocks of the UI. Each component takes
/// Props (a snapshot of the state it needs) and renders to an Element tree.
/// Components hold no state of their own: everything lives in `AppState`.
pub trait Component {
    /// Props type for this component
    type Props;

    /// Render component given props (pure function)
    fn view(&self, props: &Self::Props) -> Element;
}

/// Element in virtual component tree
#[derive(Clone)]
pub enum Element {
    /// A widget that can be directly rendered to ratatui buffer
    Widget(Box<dyn ElementWidget>),

    /// A container with layout and children
    Container {
        children: Vec<Element>,
        layout: ContainerLayout,
    },

    /// An overlay that renders on top of base content (for modals, popups, etc.)
    Overlay {
        base: Box<Element>,
        overlay: Box<Element>,
    },

    /// Nothing to render
    None,
}

impl Element {
    pub fn widget(widget: impl ElementWidget + 'static) -> Self {
        Element::Widget(Box::new(widget))
    }
}

/// Layout for container elements
#[derive(Clone)]
pub enum ContainerLayout {
    Vertical(Vec<Constraint>),
}

/// Constraint for layout
#[derive(Clone, Copy)]
pub enum Constraint {
    Length(u16),
    Min(u16),
    Max(u16),
    Percentage(u16),
}

/// Side effects returned by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Dispatch another action
    Action(Action),
    Batch(Vec<Effect>),
    /// Notify the host that the selected range changed
    RangeChanged(DateRange),
    /// Dispatch `action` once `after` has elapsed
    Delay { after: Duration, action: Action },
}

/// Trait for widgets that can be wrapped in the Element tree
pub trait ElementWidget: Send + Sync {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Clone this widget into a boxed trait object
    fn clone_box(&self) -> Box<dyn ElementWidget>;

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}

impl Clone for Box<dyn ElementWidget> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Helper to create a container with vertical layout
pub fn vertical<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Vertical(constraints.to_vec()),
    }
}

/// Helper to stack `overlay` on top of `base`
pub fn overlay(base: Element, overlay: Element) -> Element {
    Element::Overlay {
        base: Box::new(base),
        overlay: Box::new(overlay),
    }
}
