//! Submission progress reporting. Renders the current pipeline stage as
//! a four-step indicator in the selected language.

use crate::content::{translations, Language, ProgressStep};

/// How a single step is presented relative to the active stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepVisual {
    Complete,
    Active,
    Pending,
}

/// A fully resolved view of the progress indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressView {
    pub title: &'static str,
    pub hint: &'static str,
    /// Detail line for the stage currently running.
    pub current_label: &'static str,
    pub steps: [(ProgressStep, StepVisual); 4],
}

pub fn step_visual(index: usize, current: usize) -> StepVisual {
    if index < current {
        StepVisual::Complete
    } else if index == current {
        StepVisual::Active
    } else {
        StepVisual::Pending
    }
}

/// Label for the active stage. Out-of-range stages pin to the last step
/// so a finished pipeline keeps showing its closing message.
pub fn stage_label(current: usize, language: Language) -> &'static str {
    let steps = &translations(language).progress_steps;
    steps[current.min(steps.len() - 1)].label
}

/// Resolves the indicator, or `None` while it is closed.
pub fn render(is_open: bool, current: usize, language: Language) -> Option<ProgressView> {
    if !is_open {
        return None;
    }
    let t = translations(language);
    let mut steps = [(t.progress_steps[0], StepVisual::Pending); 4];
    for (index, step) in t.progress_steps.iter().enumerate() {
        steps[index] = (*step, step_visual(index, current));
    }
    Some(ProgressView {
        title: t.processing_title,
        hint: t.may_take_seconds,
        current_label: stage_label(current, language),
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_indicator_renders_nothing() {
        assert!(render(false, 2, Language::En).is_none());
    }

    #[test]
    fn test_mid_pipeline_marks_earlier_steps_complete() {
        let view = render(true, 2, Language::En).expect("view");
        let visuals: Vec<StepVisual> = view.steps.iter().map(|(_, v)| *v).collect();
        assert_eq!(
            visuals,
            vec![StepVisual::Complete, StepVisual::Complete, StepVisual::Active, StepVisual::Pending]
        );
        assert_eq!(view.current_label, "Saving to database...");
    }

    #[test]
    fn test_stage_label_clamps_past_the_end() {
        assert_eq!(stage_label(10, Language::En), stage_label(3, Language::En));
        assert_eq!(stage_label(10, Language::En), "Almost done...");
    }

    #[test]
    fn test_render_is_localized() {
        let view = render(true, 0, Language::Es).expect("view");
        assert_eq!(view.title, "Procesando Su Envío");
        assert_eq!(view.steps[0].0.name, "Captura");
    }
}
