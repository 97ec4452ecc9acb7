use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

const STIMULI: &str = "\u{feff}condition,item,context,target\n\
t_gap,1,Mary met someone.,Who did Mary meet?\n\
f_good,2,It rained.,The streets were wet.\n";

const RESULTS: &str = "# Results on Tuesday\n\
1571234567,sub01,AcceptabilityJudgment,1,0,t_gap,NULL,Question,3,NULL,2999\n\
1571234567,sub01,Message,2,0,intro,NULL,_,NULL,NULL,1\n\
1571234567,sub01,AcceptabilityJudgment,2,0,f_good,NULL,Question,7,NULL,5120\n";

fn feeder(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ibex-feeder"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("run ibex-feeder")
}

#[test]
fn default_run_converts_both_fixed_files() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("input.csv"), STIMULI).expect("stimuli");
    fs::write(dir.path().join("results.txt"), RESULTS).expect("results");

    let output = feeder(dir.path(), &[]);
    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Converting input format..."));
    assert!(stdout.contains("Tokens with extreme response times are removed."));

    let script = fs::read_to_string(dir.path().join("ibex_format.txt")).expect("script");
    assert!(script.starts_with("var shuffleSequence"));
    assert!(script.ends_with(
        "[[\"f_good\",2], q,{s: {html: \"<div style='width: 40em;'> <b>Context:</b>It rained.</div><div style='width: 40em;'><p></p><b>Target:</b>The streets were wet.</div>\"}}]"
    ));

    let table = fs::read_to_string(dir.path().join("result_clean.csv")).expect("table");
    assert_eq!(
        table,
        ",subject,item,condition,response,response_time\n1,1571234567,2,f_good,7,5120\n"
    );
}

#[test]
fn results_subcommand_honours_flags_and_summary() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("dump.txt"), RESULTS).expect("results");

    let output = feeder(
        dir.path(),
        &[
            "results",
            "--input",
            "dump.txt",
            "--out",
            "all.csv",
            "--keep-outliers",
            "--summary",
            "summary.json",
        ],
    );
    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("are NOT removed"));

    let table = fs::read_to_string(dir.path().join("all.csv")).expect("table");
    assert_eq!(table.lines().count(), 3);

    let summary: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("summary.json")).expect("json"))
            .expect("parse summary");
    assert_eq!(summary["results"]["retained"], 2);
    assert_eq!(summary["results"]["other_events"], 1);
    assert!(summary["results"]["outliers_removed"].is_null());
    assert!(summary.get("script").is_none());
}

#[test]
fn column_warnings_are_reported_without_failing() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("input.csv"),
        "condition,item,target\nt_a,1,first\nf_b,2,second,stray\n",
    )
    .expect("stimuli");
    let output = feeder(
        dir.path(),
        &["script", "--no-context", "--summary", "summary.json"],
    );
    assert!(output.status.success(), "{:?}", output);

    let summary: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("summary.json")).expect("json"))
            .expect("parse summary");
    let warnings = summary["script"]["warnings"].as_array().expect("warnings");
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0]["kind"], "column_count");
    assert_eq!(warnings[1]["kind"], "excess_fields");
    assert!(dir.path().join("ibex_format.txt").exists());
}

#[test]
fn missing_input_exits_with_failure() {
    let dir = tempdir().expect("tempdir");
    let output = feeder(dir.path(), &["script"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("ibex_format.txt").exists());
}
