//! Animation shorthand and `@keyframes` composition.

use serde::{Deserialize, Serialize};

use crate::serialize::{rule_block, Declaration};
use crate::util::with_unit;

/// How many times an animation runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Iteration {
    Count(f64),
    Infinite,
}

impl Default for Iteration {
    fn default() -> Self {
        Iteration::Count(1.0)
    }
}

impl std::fmt::Display for Iteration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Iteration::Count(n) => f.write_str(&with_unit(*n, "")),
            Iteration::Infinite => f.write_str("infinite"),
        }
    }
}

/// One step of a keyframes block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyframeStep {
    /// Percent, `0..=100`.
    pub offset: f64,
    pub declarations: Vec<Declaration>,
}

/// A named `@keyframes` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframes {
    pub name: String,
    pub steps: Vec<KeyframeStep>,
}

/// Names of the built-in keyframes.
pub const KEYFRAME_PRESETS: &[&str] = &["fade-in", "slide-in", "bounce", "pulse", "spin", "shake"];

impl Keyframes {
    /// A built-in keyframes block by name.
    pub fn builtin(name: &str) -> Option<Keyframes> {
        let steps: Vec<(f64, Vec<(&str, &str)>)> = match name {
            "fade-in" => vec![(0.0, vec![("opacity", "0")]), (100.0, vec![("opacity", "1")])],
            "slide-in" => vec![
                (0.0, vec![("transform", "translateX(-100%)"), ("opacity", "0")]),
                (100.0, vec![("transform", "translateX(0)"), ("opacity", "1")]),
            ],
            "bounce" => vec![
                (0.0, vec![("transform", "translateY(0)")]),
                (50.0, vec![("transform", "translateY(-25%)")]),
                (100.0, vec![("transform", "translateY(0)")]),
            ],
            "pulse" => vec![
                (0.0, vec![("transform", "scale(1)")]),
                (50.0, vec![("transform", "scale(1.05)")]),
                (100.0, vec![("transform", "scale(1)")]),
            ],
            "spin" => vec![
                (0.0, vec![("transform", "rotate(0deg)")]),
                (100.0, vec![("transform", "rotate(360deg)")]),
            ],
            "shake" => vec![
                (0.0, vec![("transform", "translateX(0)")]),
                (25.0, vec![("transform", "translateX(-5px)")]),
                (75.0, vec![("transform", "translateX(5px)")]),
                (100.0, vec![("transform", "translateX(0)")]),
            ],
            _ => return None,
        };
        Some(Keyframes {
            name: name.to_string(),
            steps: steps
                .into_iter()
                .map(|(offset, decls)| KeyframeStep {
                    offset,
                    declarations: decls
                        .into_iter()
                        .map(|(p, v)| Declaration::new(p, v))
                        .collect(),
                })
                .collect(),
        })
    }

    /// Renders the `@keyframes` block.
    ///
    /// ```text
    /// @keyframes fade-in {
    ///   0% {
    ///     opacity: 0;
    ///   }
    ///   100% {
    ///     opacity: 1;
    ///   }
    /// }
    /// ```
    pub fn render(&self) -> String {
        self.render_as(&self.name)
    }

    /// Renders the steps under another animation name.
    pub fn render_as(&self, name: &str) -> String {
        let mut out = format!("@keyframes {} {{\n", name);
        for step in &self.steps {
            out.push_str(&rule_block(&with_unit(step.offset, "%"), &step.declarations, 1));
            out.push('\n');
        }
        out.push('}');
        out
    }
}

/// Animation editor state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Animation name; empty disables the animation.
    pub name: String,
    pub duration_ms: f64,
    pub timing: String,
    pub delay_ms: f64,
    pub iteration: Iteration,
    pub direction: String,
    pub fill_mode: String,
    /// Keyframes emitted alongside the rule, if the animation owns them.
    pub keyframes: Option<Keyframes>,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            duration_ms: 1000.0,
            timing: "ease".to_string(),
            delay_ms: 0.0,
            iteration: Iteration::default(),
            direction: "normal".to_string(),
            fill_mode: "none".to_string(),
            keyframes: None,
        }
    }
}

impl AnimationSettings {
    /// Selects a keyframes block and names the animation after it.
    pub fn use_keyframes(&mut self, keyframes: Keyframes) {
        self.name = keyframes.name.clone();
        self.keyframes = Some(keyframes);
    }

    /// Composes the `animation` shorthand, or `None` without a name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stylecraft::{AnimationSettings, Iteration, Keyframes};
    ///
    /// let mut anim = AnimationSettings::default();
    /// anim.use_keyframes(Keyframes::builtin("spin").unwrap());
    /// anim.timing = "linear".into();
    /// anim.iteration = Iteration::Infinite;
    /// assert_eq!(
    ///     anim.compose().as_deref(),
    ///     Some("spin 1000ms linear 0ms infinite normal none")
    /// );
    /// ```
    pub fn compose(&self) -> Option<String> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(format!(
            "{} {} {} {} {} {} {}",
            name,
            with_unit(self.duration_ms, "ms"),
            self.timing.trim(),
            with_unit(self.delay_ms, "ms"),
            self.iteration,
            self.direction.trim(),
            self.fill_mode.trim()
        ))
    }

    /// The `@keyframes` block to emit, if the animation is active and owns one.
    ///
    /// The block is always named after the animation, so renaming the
    /// animation renames its keyframes too.
    pub fn keyframes_block(&self) -> Option<String> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        self.keyframes.as_ref().map(|k| k.render_as(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_name_no_animation() {
        let anim = AnimationSettings::default();
        assert_eq!(anim.compose(), None);
        assert_eq!(anim.keyframes_block(), None);
    }

    #[test]
    fn test_shorthand_with_count() {
        let anim = AnimationSettings {
            name: "wobble".into(),
            duration_ms: 500.0,
            timing: "ease-in-out".into(),
            delay_ms: 200.0,
            iteration: Iteration::Count(3.0),
            direction: "alternate".into(),
            fill_mode: "forwards".into(),
            keyframes: None,
        };
        assert_eq!(
            anim.compose().unwrap(),
            "wobble 500ms ease-in-out 200ms 3 alternate forwards"
        );
        assert_eq!(anim.keyframes_block(), None);
    }

    #[test]
    fn test_fade_in_block() {
        let block = Keyframes::builtin("fade-in").unwrap().render();
        assert_eq!(
            block,
            "@keyframes fade-in {\n  0% {\n    opacity: 0;\n  }\n  100% {\n    opacity: 1;\n  }\n}"
        );
    }

    #[test]
    fn test_renamed_animation_renames_block() {
        let mut anim = AnimationSettings::default();
        anim.use_keyframes(Keyframes::builtin("spin").unwrap());
        anim.name = "turn".into();
        let block = anim.keyframes_block().unwrap();
        assert!(block.starts_with("@keyframes turn {\n"));
        assert!(anim.compose().unwrap().starts_with("turn "));
    }

    #[test]
    fn test_every_builtin_exists() {
        for name in KEYFRAME_PRESETS {
            let k = Keyframes::builtin(name).unwrap();
            assert_eq!(k.name, *name);
            assert!(k.steps.len() >= 2);
        }
        assert!(Keyframes::builtin("wiggle").is_none());
    }

    #[test]
    fn test_iteration_display() {
        assert_eq!(Iteration::Count(2.5).to_string(), "2.5");
        assert_eq!(Iteration::Infinite.to_string(), "infinite");
    }
}
