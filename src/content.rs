//! Literal page content.
//!
//! Everything the page shows is fixed at compile time and never changes
//! after the first render.

use std::fmt;

/// Repository the hero action points at.
pub const REPOSITORY_URL: &str = "https://github.com/gauranshika29/hpc-neural-network";

pub const AUTHOR: &str = "Anshika Gaur";

pub struct HeroContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub link_label: &'static str,
    pub link_url: &'static str,
}

pub const HERO: HeroContent = HeroContent {
    title: "Speeding Up Intelligence",
    subtitle: "An HPC Exploration by Anshika Gaur",
    link_label: "View on GitHub",
    link_url: REPOSITORY_URL,
};

pub struct SummaryText {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const SUMMARY: SummaryText = SummaryText {
    heading: "Project Summary",
    body: "This project explores how neural networks can be optimized using parallelism. \
           Built in C++ from scratch, the model leverages OpenMP to dramatically reduce \
           training time while maintaining accuracy.",
};

pub const RESULTS_HEADING: &str = "Speedup Results";

pub const SCREENSHOTS_HEADING: &str = "Screenshots";

pub const FOOTER_STATEMENT: &str = "Proudly created by Anshika Gaur";

/// Wall-clock training times of the serial and OpenMP builds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Benchmark {
    pub serial_ms: u32,
    pub parallel_ms: u32,
}

pub const TRAINING_BENCHMARK: Benchmark = Benchmark {
    serial_ms: 402,
    parallel_ms: 147,
};

impl Benchmark {
    pub fn speedup(&self) -> f64 {
        f64::from(self.serial_ms) / f64::from(self.parallel_ms)
    }

    /// The three rows shown in the results card, in display order.
    pub fn results(&self) -> [BenchmarkResult; 3] {
        [
            BenchmarkResult {
                label: "Without OpenMP",
                value: format!("{} ms", self.serial_ms),
            },
            BenchmarkResult {
                label: "With OpenMP",
                value: format!("{} ms", self.parallel_ms),
            },
            BenchmarkResult {
                label: "Speedup",
                value: format!("~{:.2}×", self.speedup()),
            },
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkResult {
    pub label: &'static str,
    pub value: String,
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_match_published_numbers() {
        let results = TRAINING_BENCHMARK.results();
        let pairs: Vec<(&str, &str)> = results
            .iter()
            .map(|r| (r.label, r.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Without OpenMP", "402 ms"),
                ("With OpenMP", "147 ms"),
                ("Speedup", "~2.73×"),
            ]
        );
    }

    #[test]
    fn result_rows_render_as_label_colon_value() {
        let rendered: Vec<String> = TRAINING_BENCHMARK
            .results()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered[0], "Without OpenMP: 402 ms");
        assert_eq!(rendered[2], "Speedup: ~2.73×");
    }

    #[test]
    fn speedup_is_serial_over_parallel() {
        let bench = Benchmark {
            serial_ms: 300,
            parallel_ms: 100,
        };
        assert!((bench.speedup() - 3.0).abs() < f64::EPSILON);
        assert_eq!(bench.results()[2].value, "~3.00×");
    }

    #[test]
    fn hero_links_to_repository() {
        assert_eq!(
            HERO.link_url,
            "https://github.com/gauranshika29/hpc-neural-network"
        );
        assert!(HERO.subtitle.ends_with(AUTHOR));
        assert!(FOOTER_STATEMENT.ends_with(AUTHOR));
    }

    #[test]
    fn summary_is_one_paragraph() {
        assert!(!SUMMARY.body.contains('\n'));
        assert!(SUMMARY.body.contains("parallelism. Built in C++"));
    }
}
