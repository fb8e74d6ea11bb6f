// SPDX-License-Identifier: MPL-2.0
//! A vertical container that snaps its children to page positions.
//!
//! Children are stacked top to bottom. A vertical drag that travels past the
//! touch slop is taken away from the children and scrolls the container; on
//! release the offset eases onto the nearest page, a page being the widget
//! height divided by the visible count. Taps and short moves still reach
//! the children, so buttons inside the picker keep working.
//!
//! Both touch input and the left mouse button drive the gesture. Only the
//! first pointer of a gesture is tracked.

use crate::domain::ui::{SnapDuration, TouchSlop, VisibleCount};
use crate::ui::state::{ScrollContainer, SnapState, TouchEvent, TouchPhase, TouchResponse};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::time::Instant;
use iced::{touch, window, Element, Event, Length, Point, Rectangle, Size, Vector};

/// A vertically scrolling layout that settles on page boundaries.
pub struct SnapScrollLayout<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    children: Vec<Element<'a, Message, Theme, Renderer>>,
    width: Length,
    height: Length,
    visible_count: VisibleCount,
    touch_slop: TouchSlop,
    snap_duration: SnapDuration,
    on_snap: Option<Box<dyn Fn(usize) -> Message + 'a>>,
}

impl<'a, Message, Theme, Renderer> SnapScrollLayout<'a, Message, Theme, Renderer> {
    /// Creates a new `SnapScrollLayout` with the given children, top to bottom.
    pub fn new(
        children: impl IntoIterator<Item = Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        Self {
            children: children.into_iter().collect(),
            width: Length::Fill,
            height: Length::Fill,
            visible_count: VisibleCount::default(),
            touch_slop: TouchSlop::default(),
            snap_duration: SnapDuration::default(),
            on_snap: None,
        }
    }

    /// Appends a child below the existing ones.
    #[must_use]
    pub fn push(mut self, child: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the height of the viewport.
    ///
    /// With [`Length::Shrink`] the widget grows to fit all children, leaving
    /// nothing to scroll.
    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Sets how many pages share the widget height.
    #[must_use]
    pub fn visible_count(mut self, visible_count: impl Into<VisibleCount>) -> Self {
        self.visible_count = visible_count.into();
        self
    }

    /// Sets the vertical travel needed before a press becomes a drag.
    #[must_use]
    pub fn touch_slop(mut self, touch_slop: impl Into<TouchSlop>) -> Self {
        self.touch_slop = touch_slop.into();
        self
    }

    /// Sets the time budget of the settle animation.
    #[must_use]
    pub fn snap_duration(mut self, snap_duration: impl Into<SnapDuration>) -> Self {
        self.snap_duration = snap_duration.into();
        self
    }

    /// Sets the message produced with the target page index when a release
    /// starts settling.
    #[must_use]
    pub fn on_snap(mut self, on_snap: impl Fn(usize) -> Message + 'a) -> Self {
        self.on_snap = Some(Box::new(on_snap));
        self
    }

    /// Message announcing the page a response settles on, if any.
    fn snap_message(&self, response: &TouchResponse) -> Option<Message> {
        let snap = response.snap?;
        let on_snap = self.on_snap.as_ref()?;
        Some(on_snap(snap.index))
    }

    fn respond(&self, response: TouchResponse, shell: &mut Shell<'_, Message>) {
        if response.redraw {
            shell.request_redraw();
        }
        if let Some(message) = self.snap_message(&response) {
            shell.publish(message);
        }
    }
}

/// Pointer driving the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pointer {
    Mouse,
    Finger(touch::Finger),
}

/// A tracked pointer event in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PointerSample {
    pointer: Pointer,
    phase: TouchPhase,
    position: Point,
}

impl PointerSample {
    fn touch(&self) -> TouchEvent {
        TouchEvent {
            phase: self.phase,
            y: self.position.y,
        }
    }

    /// Event telling children the pointer is no longer theirs.
    fn cancellation(&self) -> Event {
        match self.pointer {
            Pointer::Finger(id) => Event::Touch(touch::Event::FingerLost {
                id,
                position: self.position,
            }),
            Pointer::Mouse => Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
        }
    }
}

/// Extracts the gesture-relevant part of an event.
///
/// Presses only start a gesture inside `bounds` and while no other pointer
/// is tracked; moves and releases only count for the tracked pointer.
fn pointer_sample(
    event: &Event,
    cursor: mouse::Cursor,
    bounds: Rectangle,
    tracked: Option<Pointer>,
) -> Option<PointerSample> {
    let (pointer, phase, position) = match event {
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            if tracked.is_some() || !bounds.contains(*position) {
                return None;
            }
            (Pointer::Finger(*id), TouchPhase::Down, *position)
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) => {
            (Pointer::Finger(*id), TouchPhase::Move, *position)
        }
        Event::Touch(touch::Event::FingerLifted { id, position }) => {
            (Pointer::Finger(*id), TouchPhase::Up, *position)
        }
        Event::Touch(touch::Event::FingerLost { id, position }) => {
            (Pointer::Finger(*id), TouchPhase::Cancel, *position)
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            if tracked.is_some() {
                return None;
            }
            let position = cursor.position_over(bounds)?;
            (Pointer::Mouse, TouchPhase::Down, position)
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            (Pointer::Mouse, TouchPhase::Move, *position)
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            let position = cursor.position().unwrap_or(Point::ORIGIN);
            (Pointer::Mouse, TouchPhase::Up, position)
        }
        _ => return None,
    };

    if phase != TouchPhase::Down && tracked != Some(pointer) {
        return None;
    }

    Some(PointerSample {
        pointer,
        phase,
        position,
    })
}

/// Cursor as seen by children laid out in content coordinates.
fn content_cursor(cursor: mouse::Cursor, bounds: Rectangle, offset: f32) -> mouse::Cursor {
    match cursor.position_over(bounds) {
        Some(position) => mouse::Cursor::Available(position + Vector::new(0.0, offset)),
        None => mouse::Cursor::Unavailable,
    }
}

/// Size of children stacked top to bottom: widest width, summed heights.
///
/// A `Shrink` layout resolves against this, so it shows every child and
/// never scrolls.
fn stacked_size(sizes: impl IntoIterator<Item = Size>) -> Size {
    sizes.into_iter().fold(Size::ZERO, |stacked, size| {
        Size::new(stacked.width.max(size.width), stacked.height + size.height)
    })
}

/// Part of the content visible through `bounds` at `offset`.
fn content_viewport(bounds: Rectangle, offset: f32) -> Rectangle {
    Rectangle {
        y: bounds.y + offset,
        ..bounds
    }
}

#[derive(Debug, Default)]
struct State {
    snap: SnapState,
    pointer: Option<Pointer>,
    last_size: Option<Size>,
    last_child_count: usize,
}

impl State {
    fn new(
        visible_count: VisibleCount,
        touch_slop: TouchSlop,
        snap_duration: SnapDuration,
    ) -> Self {
        Self {
            snap: SnapState::new(visible_count, touch_slop, snap_duration),
            ..Self::default()
        }
    }

    fn apply_settings(
        &mut self,
        visible_count: VisibleCount,
        touch_slop: TouchSlop,
        snap_duration: SnapDuration,
    ) {
        self.snap.set_visible_count(visible_count);
        self.snap.set_touch_slop(touch_slop);
        self.snap.set_snap_duration(snap_duration);
    }

    fn offset(&self) -> f32 {
        self.snap.offset() as f32
    }

    /// Steps the settle animation on a frame event. Returns true when another
    /// frame is needed.
    fn on_redraw(&mut self, event: &Event) -> bool {
        match event {
            Event::Window(window::Event::RedrawRequested(now)) => self.snap.on_frame(*now),
            _ => false,
        }
    }

    /// Decides where a pointer event goes and applies it to the scroll state.
    fn route(
        &mut self,
        event: &Event,
        cursor: mouse::Cursor,
        bounds: Rectangle,
        now: Instant,
    ) -> Route {
        let Some(sample) = pointer_sample(event, cursor, bounds, self.pointer) else {
            return Route::Children;
        };

        match sample.phase {
            TouchPhase::Down => self.pointer = Some(sample.pointer),
            TouchPhase::Up | TouchPhase::Cancel => self.pointer = None,
            TouchPhase::Move => {}
        }

        let touch = sample.touch();

        if self.snap.is_dragging() {
            return Route::Drag(self.snap.on_touch(touch, now));
        }

        if self.snap.on_intercept_touch(touch) {
            // The claiming move is also the first drag step
            let response = self.snap.on_touch(touch, now);
            return Route::ClaimAndCancel {
                cancellation: sample.cancellation(),
                response,
            };
        }

        Route::Children
    }
}

/// Where `update` sends an event.
#[derive(Debug, Clone)]
enum Route {
    /// Forwarded to children unchanged.
    Children,
    /// The container took the gesture: children get `cancellation`, the
    /// event is captured.
    ClaimAndCancel {
        cancellation: Event,
        response: TouchResponse,
    },
    /// Part of a gesture the container already owns; captured.
    Drag(TouchResponse),
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for SnapScrollLayout<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::new(
            self.visible_count,
            self.touch_slop,
            self.snap_duration,
        ))
    }

    fn children(&self) -> Vec<Tree> {
        self.children.iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.children);
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(self.width).height(self.height);

        let state = tree.state.downcast_mut::<State>();
        let child_limits = state.snap.on_measure(limits);

        let nodes: Vec<layout::Node> = self
            .children
            .iter_mut()
            .zip(&mut tree.children)
            .map(|(child, child_tree)| {
                child
                    .as_widget_mut()
                    .layout(child_tree, renderer, &child_limits)
            })
            .collect();

        let content = stacked_size(nodes.iter().map(layout::Node::size));
        let size = limits.resolve(self.width, self.height, content);

        let heights: Vec<i32> = nodes
            .iter()
            .map(|node| node.size().height.round() as i32)
            .collect();

        let changed = state.last_size != Some(size) || state.last_child_count != nodes.len();
        state.last_size = Some(size);
        state.last_child_count = nodes.len();

        let tops = state
            .snap
            .on_layout(changed, size.height.round() as i32, &heights);

        let children = nodes
            .into_iter()
            .zip(tops)
            .map(|(node, top)| node.move_to(Point::new(0.0, top as f32)))
            .collect();

        layout::Node::with_children(size, children)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();

        let Some(visible_bounds) = bounds.intersection(viewport) else {
            return;
        };

        let offset = state.offset();
        let cursor = content_cursor(cursor, bounds, offset);
        let content_viewport = content_viewport(visible_bounds, offset);

        renderer.with_layer(visible_bounds, |renderer| {
            renderer.with_translation(Vector::new(0.0, -offset), |renderer| {
                for ((child, child_tree), child_layout) in self
                    .children
                    .iter()
                    .zip(&tree.children)
                    .zip(layout.children())
                {
                    if !child_layout.bounds().intersects(&content_viewport) {
                        continue;
                    }
                    child.as_widget().draw(
                        child_tree,
                        renderer,
                        theme,
                        style,
                        child_layout,
                        cursor,
                        &content_viewport,
                    );
                }
            });
        });
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<State>();
        state.apply_settings(self.visible_count, self.touch_slop, self.snap_duration);

        if state.on_redraw(event) {
            shell.request_redraw();
        }

        match state.route(event, cursor, bounds, Instant::now()) {
            Route::Drag(response) => {
                self.respond(response, shell);
                shell.capture_event();
                return;
            }
            Route::ClaimAndCancel {
                cancellation,
                response,
            } => {
                let content_viewport = content_viewport(bounds, state.offset());

                for ((child, child_tree), child_layout) in self
                    .children
                    .iter_mut()
                    .zip(&mut tree.children)
                    .zip(layout.children())
                {
                    child.as_widget_mut().update(
                        child_tree,
                        &cancellation,
                        child_layout,
                        mouse::Cursor::Unavailable,
                        renderer,
                        clipboard,
                        shell,
                        &content_viewport,
                    );
                }

                self.respond(response, shell);
                shell.capture_event();
                return;
            }
            Route::Children => {}
        }

        let offset = state.offset();
        let cursor = content_cursor(cursor, bounds, offset);
        let content_viewport = content_viewport(bounds, offset);

        for ((child, child_tree), child_layout) in self
            .children
            .iter_mut()
            .zip(&mut tree.children)
            .zip(layout.children())
        {
            child.as_widget_mut().update(
                child_tree,
                event,
                child_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                &content_viewport,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();
        if state.snap.is_dragging() {
            return mouse::Interaction::Grabbing;
        }

        let bounds = layout.bounds();
        let offset = state.offset();
        let cursor = content_cursor(cursor, bounds, offset);
        let content_viewport = content_viewport(bounds, offset);

        self.children
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
            .map(|((child, child_tree), child_layout)| {
                child.as_widget().mouse_interaction(
                    child_tree,
                    child_layout,
                    cursor,
                    &content_viewport,
                    renderer,
                )
            })
            .max()
            .unwrap_or_default()
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        operation.container(None, layout.bounds());
        operation.traverse(&mut |operation| {
            self.children
                .iter_mut()
                .zip(&mut tree.children)
                .zip(layout.children())
                .for_each(|((child, child_tree), child_layout)| {
                    child
                        .as_widget_mut()
                        .operate(child_tree, child_layout, renderer, operation);
                });
        });
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let offset = tree.state.downcast_ref::<State>().offset();

        overlay::from_children(
            &mut self.children,
            tree,
            layout,
            renderer,
            viewport,
            translation - Vector::new(0.0, offset),
        )
    }
}

impl<'a, Message, Theme, Renderer> From<SnapScrollLayout<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(layout: SnapScrollLayout<'a, Message, Theme, Renderer>) -> Self {
        Self::new(layout)
    }
}

/// Helper function to create a snapping scroll layout.
pub fn snap_scroll_layout<'a, Message, Theme, Renderer>(
    children: impl IntoIterator<Item = Element<'a, Message, Theme, Renderer>>,
) -> SnapScrollLayout<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    SnapScrollLayout::new(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::SnapTarget;
    use iced::time::Duration;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(0.0, 100.0), Size::new(200.0, 300.0))
    }

    fn finger(id: u64) -> touch::Finger {
        touch::Finger(id)
    }

    #[test]
    fn finger_press_inside_bounds_starts_tracking() {
        let event = Event::Touch(touch::Event::FingerPressed {
            id: finger(1),
            position: Point::new(50.0, 250.0),
        });

        let sample = pointer_sample(&event, mouse::Cursor::Unavailable, bounds(), None)
            .expect("press inside bounds should be sampled");
        assert_eq!(sample.pointer, Pointer::Finger(finger(1)));
        assert_eq!(sample.touch(), TouchEvent::down(250.0));
    }

    #[test]
    fn finger_press_outside_bounds_is_ignored() {
        let event = Event::Touch(touch::Event::FingerPressed {
            id: finger(1),
            position: Point::new(50.0, 50.0),
        });

        assert!(pointer_sample(&event, mouse::Cursor::Unavailable, bounds(), None).is_none());
    }

    #[test]
    fn second_finger_is_ignored() {
        let tracked = Some(Pointer::Finger(finger(1)));
        let press = Event::Touch(touch::Event::FingerPressed {
            id: finger(2),
            position: Point::new(50.0, 250.0),
        });
        let moved = Event::Touch(touch::Event::FingerMoved {
            id: finger(2),
            position: Point::new(50.0, 200.0),
        });

        assert!(pointer_sample(&press, mouse::Cursor::Unavailable, bounds(), tracked).is_none());
        assert!(pointer_sample(&moved, mouse::Cursor::Unavailable, bounds(), tracked).is_none());
    }

    #[test]
    fn tracked_finger_moves_outside_bounds_still_count() {
        let tracked = Some(Pointer::Finger(finger(1)));
        let moved = Event::Touch(touch::Event::FingerMoved {
            id: finger(1),
            position: Point::new(50.0, 20.0),
        });

        let sample = pointer_sample(&moved, mouse::Cursor::Unavailable, bounds(), tracked)
            .expect("tracked finger should be sampled");
        assert_eq!(sample.touch(), TouchEvent::moved(20.0));
    }

    #[test]
    fn lost_finger_cancels() {
        let tracked = Some(Pointer::Finger(finger(3)));
        let lost = Event::Touch(touch::Event::FingerLost {
            id: finger(3),
            position: Point::new(0.0, 0.0),
        });

        let sample = pointer_sample(&lost, mouse::Cursor::Unavailable, bounds(), tracked)
            .expect("tracked finger should be sampled");
        assert_eq!(sample.phase, TouchPhase::Cancel);
    }

    #[test]
    fn left_button_drives_mouse_gesture() {
        let cursor = mouse::Cursor::Available(Point::new(20.0, 300.0));
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let sample = pointer_sample(&press, cursor, bounds(), None)
            .expect("press over widget should be sampled");
        assert_eq!(sample.pointer, Pointer::Mouse);
        assert_eq!(sample.touch(), TouchEvent::down(300.0));

        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(20.0, 240.0),
        });
        let sample = pointer_sample(&moved, cursor, bounds(), Some(Pointer::Mouse))
            .expect("move while pressed should be sampled");
        assert_eq!(sample.touch(), TouchEvent::moved(240.0));

        let release = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        let sample = pointer_sample(&release, cursor, bounds(), Some(Pointer::Mouse))
            .expect("release should be sampled");
        assert_eq!(sample.phase, TouchPhase::Up);
    }

    #[test]
    fn hover_without_press_is_ignored() {
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(20.0, 240.0),
        });
        assert!(pointer_sample(&moved, mouse::Cursor::Unavailable, bounds(), None).is_none());
    }

    #[test]
    fn other_buttons_and_events_are_ignored() {
        let right = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        let cursor = mouse::Cursor::Available(Point::new(20.0, 300.0));
        assert!(pointer_sample(&right, cursor, bounds(), None).is_none());

        let resize = Event::Window(window::Event::Resized(Size::new(100.0, 50.0)));
        assert!(pointer_sample(&resize, cursor, bounds(), None).is_none());
    }

    #[test]
    fn cancellation_matches_pointer_kind() {
        let sample = PointerSample {
            pointer: Pointer::Finger(finger(7)),
            phase: TouchPhase::Move,
            position: Point::new(1.0, 2.0),
        };
        assert!(matches!(
            sample.cancellation(),
            Event::Touch(touch::Event::FingerLost { id, .. }) if id == finger(7)
        ));

        let sample = PointerSample {
            pointer: Pointer::Mouse,
            ..sample
        };
        assert!(matches!(
            sample.cancellation(),
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        ));
    }

    #[test]
    fn content_cursor_is_shifted_by_offset() {
        let cursor = mouse::Cursor::Available(Point::new(20.0, 150.0));
        let shifted = content_cursor(cursor, bounds(), 200.0);
        assert_eq!(shifted.position(), Some(Point::new(20.0, 350.0)));

        let outside = mouse::Cursor::Available(Point::new(20.0, 10.0));
        assert_eq!(content_cursor(outside, bounds(), 200.0).position(), None);
    }

    fn routed_state() -> State {
        let mut state = State::new(
            VisibleCount::new(3),
            TouchSlop::new(10.0),
            SnapDuration::from_millis(250),
        );
        let _ = state.snap.on_layout(true, 300, &[100; 6]);
        state
    }

    fn picker_bounds() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(200.0, 300.0))
    }

    fn finger_event(phase: TouchPhase, y: f32) -> Event {
        let id = finger(1);
        let position = Point::new(50.0, y);
        Event::Touch(match phase {
            TouchPhase::Down => touch::Event::FingerPressed { id, position },
            TouchPhase::Move => touch::Event::FingerMoved { id, position },
            TouchPhase::Up => touch::Event::FingerLifted { id, position },
            TouchPhase::Cancel => touch::Event::FingerLost { id, position },
        })
    }

    #[test]
    fn touch_gesture_is_routed_from_children_to_drag() {
        let mut state = routed_state();
        let cursor = mouse::Cursor::Unavailable;
        let now = Instant::now();
        let bounds = picker_bounds();

        let route = state.route(&finger_event(TouchPhase::Down, 250.0), cursor, bounds, now);
        assert!(matches!(route, Route::Children));
        assert_eq!(state.pointer, Some(Pointer::Finger(finger(1))));

        // Below the slop, children keep the gesture
        let route = state.route(&finger_event(TouchPhase::Move, 245.0), cursor, bounds, now);
        assert!(matches!(route, Route::Children));
        assert_eq!(state.snap.offset(), 0);

        // Claiming move cancels children and scrolls the whole travel
        let route = state.route(&finger_event(TouchPhase::Move, 190.0), cursor, bounds, now);
        match route {
            Route::ClaimAndCancel {
                cancellation,
                response,
            } => {
                assert!(matches!(
                    cancellation,
                    Event::Touch(touch::Event::FingerLost { id, .. }) if id == finger(1)
                ));
                assert!(response.redraw);
                assert!(response.snap.is_none());
            }
            other => panic!("expected claim, got {other:?}"),
        }
        assert_eq!(state.snap.offset(), 60);

        let route = state.route(&finger_event(TouchPhase::Move, 150.0), cursor, bounds, now);
        assert!(matches!(route, Route::Drag(TouchResponse { redraw: true, snap: None })));
        assert_eq!(state.snap.offset(), 100);

        let route = state.route(&finger_event(TouchPhase::Up, 150.0), cursor, bounds, now);
        match route {
            Route::Drag(response) => {
                assert!(response.redraw);
                assert_eq!(response.snap.map(|snap| snap.index), Some(1));
            }
            other => panic!("expected drag, got {other:?}"),
        }
        assert_eq!(state.pointer, None);

        // Once released, the next event belongs to children again
        let route = state.route(&finger_event(TouchPhase::Move, 100.0), cursor, bounds, now);
        assert!(matches!(route, Route::Children));
    }

    #[test]
    fn mouse_claim_releases_left_button_for_children() {
        let mut state = routed_state();
        let now = Instant::now();
        let bounds = picker_bounds();
        let over = mouse::Cursor::Available(Point::new(50.0, 250.0));

        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(matches!(state.route(&press, over, bounds, now), Route::Children));

        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(50.0, 200.0),
        });
        match state.route(&moved, over, bounds, now) {
            Route::ClaimAndCancel { cancellation, .. } => assert!(matches!(
                cancellation,
                Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            )),
            other => panic!("expected claim, got {other:?}"),
        }
        assert_eq!(state.snap.offset(), 50);
    }

    #[test]
    fn tap_is_left_to_children() {
        let mut state = routed_state();
        let cursor = mouse::Cursor::Unavailable;
        let now = Instant::now();
        let bounds = picker_bounds();

        let tap = [
            (TouchPhase::Down, 120.0),
            (TouchPhase::Move, 125.0),
            (TouchPhase::Up, 125.0),
        ];
        for (phase, y) in tap {
            let route = state.route(&finger_event(phase, y), cursor, bounds, now);
            assert!(matches!(route, Route::Children));
        }
        assert_eq!(state.snap.offset(), 0);
        assert!(!state.snap.is_settling());
    }

    #[test]
    fn redraw_drives_settle_until_done() {
        let mut state = routed_state();
        let cursor = mouse::Cursor::Unavailable;
        let start = Instant::now();
        let bounds = picker_bounds();

        let drag = [
            (TouchPhase::Down, 250.0),
            (TouchPhase::Move, 180.0),
            (TouchPhase::Up, 180.0),
        ];
        for (phase, y) in drag {
            let _ = state.route(&finger_event(phase, y), cursor, bounds, start);
        }
        assert!(state.snap.is_settling());

        let frame = |at: Instant| Event::Window(window::Event::RedrawRequested(at));
        assert!(state.on_redraw(&frame(start + Duration::from_millis(100))));
        assert!(state.on_redraw(&frame(start + Duration::from_millis(300))));
        assert_eq!(state.snap.offset(), 100);
        assert!(!state.on_redraw(&frame(start + Duration::from_millis(316))));

        let resize = Event::Window(window::Event::Resized(Size::new(10.0, 10.0)));
        assert!(!state.on_redraw(&resize));
    }

    #[test]
    fn settle_response_publishes_snap_index() {
        let layout: SnapScrollLayout<'_, usize> =
            SnapScrollLayout::new(Vec::new()).on_snap(|index| index * 10);
        let response = TouchResponse {
            redraw: true,
            snap: Some(SnapTarget {
                index: 2,
                offset: 200,
            }),
        };

        assert_eq!(layout.snap_message(&response), Some(20));
        assert_eq!(layout.snap_message(&TouchResponse::default()), None);

        let silent: SnapScrollLayout<'_, usize> = SnapScrollLayout::new(Vec::new());
        assert_eq!(silent.snap_message(&response), None);
    }

    #[test]
    fn stacked_size_sums_heights_and_keeps_widest() {
        let size = stacked_size([Size::new(80.0, 100.0), Size::new(120.0, 50.0)]);
        assert_eq!(size, Size::new(120.0, 150.0));
        assert_eq!(stacked_size(std::iter::empty()), Size::ZERO);
    }

    #[test]
    fn content_viewport_follows_offset() {
        let viewport = content_viewport(bounds(), 120.0);
        assert_eq!(viewport.y, 220.0);
        assert_eq!(viewport.height, 300.0);
    }
}
