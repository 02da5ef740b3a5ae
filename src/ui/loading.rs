use crate::Result;
use askama::Template;
use rand::Rng;

const DOT_DELAYS: &[&str] = &["0ms", "150ms", "300ms"];
const SKELETON_MIN_WIDTH: u32 = 60;
const SKELETON_MAX_WIDTH: u32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingVariant {
    #[default]
    Spinner,
    Dots,
    Pulse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LoadingSize {
    /// Dots are drawn smaller than a single spinner or pulse of the same size.
    fn indicator_class(self, variant: LoadingVariant) -> &'static str {
        match (variant, self) {
            (LoadingVariant::Dots, Self::Small) => "w-1 h-1",
            (LoadingVariant::Dots, Self::Medium) => "w-2 h-2",
            (LoadingVariant::Dots, Self::Large) => "w-3 h-3",
            (_, Self::Small) => "w-4 h-4",
            (_, Self::Medium) => "w-8 h-8",
            (_, Self::Large) => "w-12 h-12",
        }
    }

    fn text_class(self) -> &'static str {
        match self {
            Self::Small => "text-sm",
            Self::Medium => "text-base",
            Self::Large => "text-lg",
        }
    }
}

#[derive(Template)]
#[template(path = "loading/spinner.html")]
struct SpinnerTemplate<'a> {
    dots: bool,
    pulse: bool,
    indicator: &'static str,
    text_size: &'static str,
    dot_delays: &'static [&'static str],
    text: Option<&'a str>,
    class: &'a str,
}

#[derive(Template)]
#[template(path = "loading/skeleton.html")]
struct SkeletonTemplate<'a> {
    widths: Vec<u32>,
    class: &'a str,
}

#[derive(Template)]
#[template(path = "loading/overlay.html")]
struct OverlayTemplate {
    spinner: String,
}

#[derive(Template)]
#[template(path = "loading/progress.html")]
struct ProgressTemplate<'a> {
    progress: f64,
    percent: f64,
    text: Option<&'a str>,
    class: &'a str,
}

/// Animated indicator with an optional caption underneath.
#[derive(Debug, Clone, Default)]
pub struct LoadingSpinner {
    pub variant: LoadingVariant,
    pub size: LoadingSize,
    pub text: Option<String>,
    pub class: String,
}

impl LoadingSpinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: LoadingVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: LoadingSize) -> Self {
        self.size = size;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn render(&self) -> Result<String> {
        let template = SpinnerTemplate {
            dots: self.variant == LoadingVariant::Dots,
            pulse: self.variant == LoadingVariant::Pulse,
            indicator: self.size.indicator_class(self.variant),
            text_size: self.size.text_class(),
            dot_delays: DOT_DELAYS,
            text: self.text.as_deref(),
            class: &self.class,
        };
        Ok(template.render()?)
    }
}

/// Placeholder bars of random width standing in for content still loading.
pub fn loading_skeleton<R: Rng>(lines: usize, class: &str, rng: &mut R) -> Result<String> {
    let widths = (0..lines)
        .map(|_| rng.gen_range(SKELETON_MIN_WIDTH..SKELETON_MAX_WIDTH))
        .collect();
    Ok(SkeletonTemplate { widths, class }.render()?)
}

/// Full-screen blocking overlay. Renders nothing while hidden.
pub fn loading_overlay(visible: bool, text: Option<&str>) -> Result<Option<String>> {
    if !visible {
        return Ok(None);
    }

    let mut spinner = LoadingSpinner::new().size(LoadingSize::Large);
    if let Some(text) = text {
        spinner = spinner.text(text);
    }
    let spinner = spinner.render()?;
    Ok(Some(OverlayTemplate { spinner }.render()?))
}

/// Horizontal bar filled to `progress` percent. Values outside 0..=100 are
/// rendered as given.
pub fn progress_bar(progress: f64, text: Option<&str>, class: &str) -> Result<String> {
    let template = ProgressTemplate {
        progress,
        // `+ 0.0` turns a rounded -0 into 0.
        percent: progress.round() + 0.0,
        text,
        class,
    };
    Ok(template.render()?)
}
