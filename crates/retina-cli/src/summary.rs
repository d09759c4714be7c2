use std::path::Path;

use console::Style;
use retina_core::binarize::{BinarizationConfig, BinarizationOutcome};
use retina_core::roc::RocConfig;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(title.chars().count())));
    println!();
}

pub fn print_threshold_summary(
    input: &Path,
    config: &BinarizationConfig,
    outcomes: &[BinarizationOutcome],
) {
    let s = Styles::new();
    print_title(&s, "Thresholding");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Method"),
        s.method.apply_to(&config.method)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Compression"),
        if config.compress_histogram {
            s.value.apply_to("on")
        } else {
            s.disabled.apply_to("off")
        }
    );
    if let Some(bins) = config.bins {
        println!("  {:<14}{}", s.label.apply_to("Bins"), s.value.apply_to(bins));
    }
    println!();

    println!("  {}", s.header.apply_to("Thresholds"));
    for outcome in outcomes {
        match outcome.threshold {
            Some(t) => println!(
                "    {:<14}{}",
                s.method.apply_to(outcome.method),
                s.value.apply_to(t)
            ),
            // Rendered as -1, the same sentinel the text exports use.
            None => println!(
                "    {:<14}{}",
                s.method.apply_to(outcome.method),
                s.disabled.apply_to("-1 (not found)")
            ),
        }
    }
    println!();
}

pub fn print_roc_summary(
    config: &RocConfig,
    positives: usize,
    negatives: usize,
    points: usize,
    auc_trapz: f64,
    auc_wmw: Option<f64>,
) {
    let s = Styles::new();
    print_title(&s, "ROC Evaluation");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Samples"),
        s.value.apply_to(format!("{positives} positive / {negatives} negative"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Orientation"),
        s.method.apply_to(if config.higher_is_positive {
            "higher is positive"
        } else {
            "lower is positive"
        })
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Workers"),
        if config.parallel {
            s.value.apply_to(config.workers.to_string())
        } else {
            s.disabled.apply_to("sequential".to_string())
        }
    );
    println!("  {:<14}{}", s.label.apply_to("Points"), s.value.apply_to(points));
    println!();

    println!("  {}", s.header.apply_to("AUC"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Trapezoid"),
        s.value.apply_to(format!("{auc_trapz:.6}"))
    );
    match auc_wmw {
        Some(wmw) => println!(
            "    {:<12}{}",
            s.label.apply_to("WMW"),
            s.value.apply_to(format!("{wmw:.6}"))
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("WMW"),
            s.disabled.apply_to("skipped")
        ),
    }
    println!();
}
