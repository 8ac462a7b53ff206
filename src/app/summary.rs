use crate::metrics::RunMetrics;

pub(crate) fn print_summary(metrics: &RunMetrics) {
    println!();
    for line in metrics.summary_lines() {
        println!("{}", line);
    }
}
