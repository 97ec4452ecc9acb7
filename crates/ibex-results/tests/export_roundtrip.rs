use std::fs;

use ibex_results::{
    clean_results, read_results, write_results, OutlierWindow, ResultsOptions, JUDGMENT_MARKER,
};
use tempfile::tempdir;

fn dump() -> String {
    let mut lines = vec!["# header comment".to_string()];
    for (item, condition, response, rt) in [
        ("1", "t_gap", "2", "2500"),
        ("2", "f_good", "7", "4200"),
        ("3", "t_island", "\"3, maybe\"", "8100"),
        ("4", "f_bad", "1", "150000"),
    ] {
        lines.push(format!(
            "1571234567,sub01,{JUDGMENT_MARKER},{item},0,{condition},NULL,Question,{response},NULL,{rt}"
        ));
    }
    lines.join("\n") + "\n"
}

#[test]
fn cleaned_table_round_trips_through_csv() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("results.txt");
    fs::write(&input, dump()).expect("write dump");

    let cleaned = clean_results(&input, &ResultsOptions::default()).expect("clean");
    assert_eq!(cleaned.summary.filter.retained, 4);
    assert_eq!(cleaned.summary.outliers_removed, Some(2));
    assert_eq!(cleaned.summary.written, 2);

    let output = dir.path().join("result_clean.csv");
    write_results(&cleaned.table, &output).expect("write");
    let text = fs::read_to_string(&output).expect("read text");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some(",subject,item,condition,response,response_time")
    );
    assert_eq!(lines.next(), Some("1,1571234567,2,f_good,7,4200"));

    let restored = read_results(&output).expect("read back");
    assert_eq!(restored, cleaned.table);
    assert_eq!(restored.entries[1].index, 2);
    assert_eq!(restored.entries[1].row.response, "3, maybe");
}

#[test]
fn keeping_outliers_writes_every_judgment() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("results.txt");
    fs::write(&input, dump()).expect("write dump");
    let options = ResultsOptions {
        remove_outliers: false,
        window: OutlierWindow::default(),
    };
    let cleaned = clean_results(&input, &options).expect("clean");
    assert_eq!(cleaned.summary.outliers_removed, None);
    assert_eq!(cleaned.table.len(), 4);

    let output = dir.path().join("result_clean.csv");
    fs::write(&output, "stale contents").expect("seed stale output");
    write_results(&cleaned.table, &output).expect("write");
    assert_eq!(read_results(&output).expect("read back"), cleaned.table);
}

#[test]
fn missing_dump_is_fatal() {
    let dir = tempdir().expect("tempdir");
    let err = clean_results(&dir.path().join("results.txt"), &ResultsOptions::default())
        .expect_err("must fail");
    assert_eq!(err.info().code, "results-read");
}
