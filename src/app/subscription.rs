// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are reduced to the few the wizard cares about (file drops
//! and the diagnostics shortcut); everything else is handled by widgets.

use super::Message;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Frame interval while something on screen moves.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Interval for notification auto-dismiss checks when nothing moves.
const IDLE_TICK: Duration = Duration::from_millis(100);

/// Routes file drops and the `Ctrl+Shift+D` diagnostics export shortcut.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Character(ref c),
            modifiers,
            ..
        }) if status == event::Status::Ignored
            && c.eq_ignore_ascii_case("d")
            && modifiers.command()
            && modifiers.shift() =>
        {
            Some(Message::ExportDiagnostics)
        }
        _ => None,
    })
}

/// Creates the periodic tick driving step animations, the spinner, camera
/// preview polling and notification auto-dismiss.
pub fn create_tick_subscription(animating: bool, has_notifications: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_FRAME).map(Message::Tick)
    } else if has_notifications {
        time::every(IDLE_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
