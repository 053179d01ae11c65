use std::process::Command;

fn run(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_noise-maker"))
        .args(args)
        .output()
        .expect("Failed to start noise-maker");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("Output was not UTF-8")
}

#[test]
fn writes_requested_number_of_rows() {
    let log = run(&["--rows", "250", "--seed", "1"]);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(log.as_bytes());
    let records: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(records.len(), 250);
    assert!(records.iter().all(|r| r.len() == 5));
}

#[test]
fn seed_makes_output_deterministic() {
    let args = ["--rows", "40", "--seed", "1234", "--malformed-ratio", "0.3"];
    assert_eq!(run(&args), run(&args));
}

#[test]
fn writes_to_output_file() {
    let path = std::env::temp_dir().join(format!("noise-maker-{}.csv", std::process::id()));
    let path_str = path.to_str().unwrap();
    let stdout = run(&["--rows", "10", "--seed", "2", "--output", path_str]);
    assert!(stdout.is_empty());
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 10);
    std::fs::remove_file(&path).ok();
}

#[test]
fn rejects_ratio_above_one() {
    let status = Command::new(env!("CARGO_BIN_EXE_noise-maker"))
        .args(["--malformed-ratio", "2"])
        .status()
        .expect("Failed to start noise-maker");
    assert!(!status.success());
}
