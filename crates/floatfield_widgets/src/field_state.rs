//! Per-instance state shared by both field widgets

use floatfield_core::FocusState;
use floatfield_theme::LabelTokens;

use crate::floating_label::{
    FloatingLabel, LabelAnimationPolicy, LabelPlacement, LabelTransition, TransitionCause,
};
use crate::view::LabelTransform;

/// Focus flag, content flag and label animation for one field
#[derive(Clone, Debug)]
pub(crate) struct FieldCore {
    focus: FocusState,
    label: FloatingLabel,
    has_text: bool,
    policy: LabelAnimationPolicy,
}

impl FieldCore {
    pub fn new(text: &str, policy: LabelAnimationPolicy, tokens: &LabelTokens) -> Self {
        let has_text = !text.is_empty();
        Self {
            focus: FocusState::new(),
            label: FloatingLabel::new(false, has_text, tokens),
            has_text,
            policy,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    pub fn set_policy(&mut self, policy: LabelAnimationPolicy) {
        self.policy = policy;
    }

    pub fn placement(&self) -> LabelPlacement {
        self.label.placement()
    }

    pub fn transform(&self) -> LabelTransform {
        self.label.transform()
    }

    pub fn is_animating(&self) -> bool {
        self.label.is_animating()
    }

    pub fn focus(&mut self, tokens: &LabelTokens) -> Option<LabelTransition> {
        if !self.focus.focus() {
            return None;
        }
        self.relabel(TransitionCause::Focus, tokens)
    }

    pub fn blur(&mut self, tokens: &LabelTokens) -> Option<LabelTransition> {
        if !self.focus.blur() {
            return None;
        }
        self.relabel(TransitionCause::Focus, tokens)
    }

    pub fn content_changed(&mut self, text: &str, tokens: &LabelTokens) -> Option<LabelTransition> {
        let has_text = !text.is_empty();
        if has_text == self.has_text {
            return None;
        }
        self.has_text = has_text;
        self.relabel(TransitionCause::Content, tokens)
    }

    /// Drop focus and settle the label
    pub fn teardown(&mut self, tokens: &LabelTokens) -> Option<LabelTransition> {
        self.focus.reset();
        self.relabel(TransitionCause::Teardown, tokens)
    }

    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.label.tick(dt_ms)
    }

    fn relabel(&mut self, cause: TransitionCause, tokens: &LabelTokens) -> Option<LabelTransition> {
        self.label.update(
            self.focus.is_focused(),
            self.has_text,
            cause,
            self.policy,
            tokens,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_while_focused_keeps_label_active() {
        let tokens = LabelTokens::default();
        let mut core = FieldCore::new("", LabelAnimationPolicy::FocusOnly, &tokens);

        assert!(core.focus(&tokens).is_some());
        assert!(core.content_changed("a", &tokens).is_none());
        assert!(core.content_changed("", &tokens).is_none());
        assert_eq!(core.placement(), LabelPlacement::Active);
    }

    #[test]
    fn test_blur_with_text_stays_active() {
        let tokens = LabelTokens::default();
        let mut core = FieldCore::new("filled", LabelAnimationPolicy::FocusOnly, &tokens);
        assert_eq!(core.placement(), LabelPlacement::Active);

        core.focus(&tokens);
        assert!(core.blur(&tokens).is_none());
        assert_eq!(core.placement(), LabelPlacement::Active);
    }

    #[test]
    fn test_teardown_resets_focus_without_animation() {
        let tokens = LabelTokens::default();
        let mut core = FieldCore::new("", LabelAnimationPolicy::FocusAndContent, &tokens);
        core.focus(&tokens);

        let transition = core.teardown(&tokens).unwrap();
        assert!(!core.is_focused());
        assert!(!transition.animated);
        assert!(!core.is_animating());
        assert_eq!(core.placement(), LabelPlacement::Resting);
    }
}
