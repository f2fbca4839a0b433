use colored::Colorize;
use hmy_probe_lib::{
    bench::{BenchSummary, StressReport},
    harness::TestMetric,
    rpc::RpcMethod,
    sanitize::redact_secret,
    sanitize_error, NetworkName, NetworkProfile,
};

pub fn print_metric(metric: &TestMetric) {
    let status = if metric.pass { "PASS".green().bold() } else { "FAIL".red().bold() };
    println!("{status} {} {} ({})", metric.method.cyan(), metric.test, metric.duration);
    if let Some(error) = &metric.error {
        println!("     {}", error.red());
    }
}

pub fn print_summary(passed: usize, failed: usize, report_path: &str) {
    let line = format!("{passed} passed, {failed} failed");
    if failed == 0 {
        println!("\n{}", line.green().bold());
    } else {
        println!("\n{}", line.red().bold());
    }
    println!("Report written to {report_path}");
}

pub fn print_profile(profile: &NetworkProfile) {
    println!("=== Network Profile: {} ===", profile.network().to_string().bold());
    println!("  network_id:   {}", profile.network_id());
    println!("  endpoint_url: {}", sanitize_error!(profile.endpoint_url()));
    println!("  shard_id:     {}", profile.shard_id());
    println!("  chain_id:     {}", profile.chain_id());
    println!("  mnemonic:     {}", redact_secret(profile.credential().mnemonic()));
    println!("  private_key:  {}", redact_secret(profile.credential().private_key()));
    println!("  gas_limit:    {}", profile.gas().gas_limit);
    println!("  gas_price:    {}", profile.gas().gas_price);
}

pub fn print_profile_check(network: NetworkName, problems: &[String]) {
    if problems.is_empty() {
        println!("{} {network}", "✓".green());
        return;
    }
    println!("{} {network}", "✗".red());
    for problem in problems {
        println!("   - {problem}");
    }
}

pub fn print_bench_summary(method: RpcMethod, summary: &BenchSummary) {
    println!("=== Benchmark: {} ===", method.to_string().cyan());
    println!("  requests:       {}", summary.processed);
    let failures = summary.failures.to_string();
    if summary.failures == 0 {
        println!("  failures:       {}", failures.green());
    } else {
        println!("  failures:       {}", failures.red());
    }
    println!("  average:        {} ms", summary.average().as_millis());
    println!("  total elapsed:  {} ms", summary.elapsed.as_millis());
}

pub fn print_stress_report(report: &StressReport, report_path: &str) {
    println!("=== Stress: {} ===", report.network.bold());
    for (method, result) in &report.methods {
        let failures = if result.failures == 0 {
            result.failures.to_string().green()
        } else {
            result.failures.to_string().red()
        };
        println!(
            "  {:<32} {:>6} responses  {} failures  avg {}",
            method.cyan(),
            result.responses,
            failures,
            result.average
        );
    }
    println!("Report written to {report_path}");
}
