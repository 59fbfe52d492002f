//! Floating placeholder label
//!
//! The label has two placements:
//!
//! - **Resting**: field unfocused and empty; full size, inside the box
//! - **Active**: field focused or non-empty; half size, anchored to its leading
//!   edge, lifted above the box
//!
//! [`FloatingLabel`] tracks the placement, eases the label's scale and offset
//! between the two poses, and reports each placement change as a
//! [`LabelTransition`]. Hosts observe transitions through
//! [`TransitionListeners`]; the easing curve stays internal.

use std::sync::{Arc, Mutex};

use floatfield_animation::{Easing, Tween};
use floatfield_core::sync::lock;
use floatfield_theme::LabelTokens;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::view::{Alignment, LabelTransform};

/// Where the label sits relative to the input box
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPlacement {
    Resting,
    Active,
}

impl LabelPlacement {
    /// Placement for the given focus and content state
    pub fn resolve(focused: bool, has_text: bool) -> Self {
        if focused || has_text {
            LabelPlacement::Active
        } else {
            LabelPlacement::Resting
        }
    }

    /// Settled transform for this placement
    pub fn pose(&self, tokens: &LabelTokens) -> LabelTransform {
        match self {
            LabelPlacement::Resting => LabelTransform {
                scale: tokens.resting_scale,
                anchor: Alignment::Leading,
                offset_y: 0.0,
            },
            LabelPlacement::Active => LabelTransform {
                scale: tokens.active_scale,
                anchor: Alignment::Leading,
                offset_y: tokens.active_offset_y,
            },
        }
    }
}

/// What caused a placement change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionCause {
    /// Focus gained or lost
    Focus,
    /// Text became empty or non-empty
    Content,
    /// Widget torn down
    Teardown,
}

/// Which placement changes animate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelAnimationPolicy {
    /// Animate focus-driven changes; content-driven changes snap
    #[default]
    FocusOnly,
    /// Animate focus- and content-driven changes
    FocusAndContent,
}

impl LabelAnimationPolicy {
    pub fn animates(&self, cause: TransitionCause) -> bool {
        match (self, cause) {
            (_, TransitionCause::Teardown) => false,
            (_, TransitionCause::Focus) => true,
            (LabelAnimationPolicy::FocusOnly, TransitionCause::Content) => false,
            (LabelAnimationPolicy::FocusAndContent, TransitionCause::Content) => true,
        }
    }
}

/// A placement change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelTransition {
    pub from: LabelPlacement,
    pub to: LabelPlacement,
    pub cause: TransitionCause,
    /// Whether the change is eased rather than applied immediately
    pub animated: bool,
}

/// Label placement plus the tweens that move it
#[derive(Clone, Debug)]
pub struct FloatingLabel {
    placement: LabelPlacement,
    scale: Tween<f32>,
    offset_y: Tween<f32>,
}

impl FloatingLabel {
    /// A settled label for the given initial state
    pub fn new(focused: bool, has_text: bool, tokens: &LabelTokens) -> Self {
        let placement = LabelPlacement::resolve(focused, has_text);
        let pose = placement.pose(tokens);
        Self {
            placement,
            scale: Tween::settled(pose.scale),
            offset_y: Tween::settled(pose.offset_y),
        }
    }

    pub fn placement(&self) -> LabelPlacement {
        self.placement
    }

    /// Re-resolve placement; returns the transition if placement changed
    pub fn update(
        &mut self,
        focused: bool,
        has_text: bool,
        cause: TransitionCause,
        policy: LabelAnimationPolicy,
        tokens: &LabelTokens,
    ) -> Option<LabelTransition> {
        let next = LabelPlacement::resolve(focused, has_text);
        if next == self.placement {
            return None;
        }

        let animated = policy.animates(cause) && tokens.transition_ms > 0.0;
        let pose = next.pose(tokens);
        if animated {
            self.scale
                .retarget(pose.scale, tokens.transition_ms, Easing::EaseOut);
            self.offset_y
                .retarget(pose.offset_y, tokens.transition_ms, Easing::EaseOut);
        } else {
            self.scale.snap(pose.scale);
            self.offset_y.snap(pose.offset_y);
        }

        let transition = LabelTransition {
            from: self.placement,
            to: next,
            cause,
            animated,
        };
        self.placement = next;
        Some(transition)
    }

    /// Advance the animation; returns whether it is still running
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let scale = self.scale.tick(dt_ms);
        let offset = self.offset_y.tick(dt_ms);
        scale || offset
    }

    pub fn is_animating(&self) -> bool {
        !self.scale.is_finished() || !self.offset_y.is_finished()
    }

    /// Current (possibly mid-animation) transform
    pub fn transform(&self) -> LabelTransform {
        LabelTransform {
            scale: self.scale.value(),
            anchor: Alignment::Leading,
            offset_y: self.offset_y.value(),
        }
    }
}

new_key_type! {
    /// Handle returned when registering a transition listener
    pub struct ListenerId;
}

type Listener = Arc<dyn Fn(&LabelTransition) + Send + Sync>;

/// Subscribers to a widget's label transitions
#[derive(Default)]
pub struct TransitionListeners {
    listeners: Mutex<SlotMap<ListenerId, Listener>>,
}

impl TransitionListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&LabelTransition) + Send + Sync + 'static,
    {
        lock(&self.listeners).insert(Arc::new(listener))
    }

    pub fn remove(&self, id: ListenerId) -> bool {
        lock(&self.listeners).remove(id).is_some()
    }

    /// Call every listener; must not be called while holding widget state
    pub fn notify(&self, transition: &LabelTransition) {
        let listeners: SmallVec<[Listener; 4]> = lock(&self.listeners).values().cloned().collect();
        for listener in listeners {
            listener(transition);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> LabelTokens {
        LabelTokens::default()
    }

    #[test]
    fn test_resolve_truth_table() {
        assert_eq!(LabelPlacement::resolve(false, false), LabelPlacement::Resting);
        assert_eq!(LabelPlacement::resolve(true, false), LabelPlacement::Active);
        assert_eq!(LabelPlacement::resolve(false, true), LabelPlacement::Active);
        assert_eq!(LabelPlacement::resolve(true, true), LabelPlacement::Active);
    }

    #[test]
    fn test_poses() {
        let tokens = tokens();
        let resting = LabelPlacement::Resting.pose(&tokens);
        assert_eq!(resting.scale, 1.0);
        assert_eq!(resting.offset_y, 0.0);

        let active = LabelPlacement::Active.pose(&tokens);
        assert_eq!(active.scale, 0.5);
        assert_eq!(active.offset_y, -45.0);
        assert_eq!(active.anchor, Alignment::Leading);
    }

    #[test]
    fn test_focus_change_animates() {
        let tokens = tokens();
        let mut label = FloatingLabel::new(false, false, &tokens);

        let transition = label
            .update(true, false, TransitionCause::Focus, LabelAnimationPolicy::FocusOnly, &tokens)
            .unwrap();
        assert_eq!(transition.from, LabelPlacement::Resting);
        assert_eq!(transition.to, LabelPlacement::Active);
        assert!(transition.animated);
        assert!(label.is_animating());

        // Ease-out: more than half way after half the duration
        label.tick(tokens.transition_ms / 2.0);
        let mid = label.transform();
        assert!(mid.scale < 0.75 && mid.scale > 0.5, "scale was {}", mid.scale);

        assert!(!label.tick(tokens.transition_ms));
        assert_eq!(label.transform(), LabelPlacement::Active.pose(&tokens));
    }

    #[test]
    fn test_content_change_snaps_under_focus_only() {
        let tokens = tokens();
        let mut label = FloatingLabel::new(false, false, &tokens);

        let transition = label
            .update(false, true, TransitionCause::Content, LabelAnimationPolicy::FocusOnly, &tokens)
            .unwrap();
        assert!(!transition.animated);
        assert!(!label.is_animating());
        assert_eq!(label.transform(), LabelPlacement::Active.pose(&tokens));
    }

    #[test]
    fn test_content_change_animates_when_allowed() {
        let tokens = tokens();
        let mut label = FloatingLabel::new(false, true, &tokens);

        let transition = label
            .update(
                false,
                false,
                TransitionCause::Content,
                LabelAnimationPolicy::FocusAndContent,
                &tokens,
            )
            .unwrap();
        assert!(transition.animated);
        assert!(label.is_animating());
    }

    #[test]
    fn test_no_transition_when_placement_unchanged() {
        let tokens = tokens();
        let mut label = FloatingLabel::new(true, false, &tokens);
        assert!(label
            .update(true, true, TransitionCause::Content, LabelAnimationPolicy::FocusOnly, &tokens)
            .is_none());
    }

    #[test]
    fn test_listeners() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let listeners = TransitionListeners::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let id = listeners.add(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let transition = LabelTransition {
            from: LabelPlacement::Resting,
            to: LabelPlacement::Active,
            cause: TransitionCause::Focus,
            animated: true,
        };
        listeners.notify(&transition);
        assert!(listeners.remove(id));
        listeners.notify(&transition);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
