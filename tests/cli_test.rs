use assert_cmd::Command;
use predicates::prelude::*;

fn arrayproc() -> Command {
    let mut cmd = Command::cargo_bin("arrayproc").unwrap();
    // Keep the developer's environment out of the layered config.
    for var in [
        "ARRAYPROC_EMPTY_AVERAGE",
        "ARRAYPROC_OVERFLOW",
        "ARRAYPROC_NEGATIVE",
        "ARRAYPROC_FORMAT",
        "ARRAYPROC_PRECISION",
        "ARRAYPROC_NO_PROMPT",
        "ARRAYPROC_LOG_LEVEL",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn prints_array_average_and_factorials_in_order() {
    arrayproc()
        .write_stdin("4\n1 2 3 4\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            "(?s)Enter the size of the array:.*Input array: \\[1, 2, 3, 4\\]\n\
             Average of elements at odd indices: 3.00\n\
             Factorials: \\[1, 2, 6, 24\\]\n$",
        )
        .unwrap());
}

#[test]
fn single_element_average_is_nan() {
    arrayproc()
        .arg("--no-prompt")
        .write_stdin("1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Average of elements at odd indices: NaN"))
        .stdout(predicate::str::contains("Factorials: [120]"));
}

#[test]
fn single_element_strict_average_fails() {
    arrayproc()
        .args(["--no-prompt", "--empty-average", "error"])
        .write_stdin("1 5")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Input array: [5]"))
        .stdout(predicate::str::contains("Factorials").not())
        .stderr(predicate::str::contains("error: array of length 1 has no odd index"));
}

#[test]
fn empty_array() {
    arrayproc()
        .arg("--no-prompt")
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input array: []"))
        .stdout(predicate::str::contains("Factorials: []"));
}

#[test]
fn malformed_token_fails() {
    arrayproc()
        .write_stdin("3\n1 two 3\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("found 'two'"));
}

#[test]
fn short_input_fails() {
    arrayproc()
        .write_stdin("3\n1 2\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("input ended after 2 of 3 integers"));
}

#[test]
fn negative_factorial_fails_by_default() {
    arrayproc()
        .arg("--no-prompt")
        .write_stdin("2 -3 4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative value -3 at index 0"));

    arrayproc()
        .args(["--no-prompt", "--negative", "empty-product"])
        .write_stdin("2 -3 4")
        .assert()
        .success()
        .stdout(predicate::str::contains("Factorials: [1, 24]"));
}

#[test]
fn json_output() {
    arrayproc()
        .args(["--format", "json"])
        .write_stdin("3 0 0 0")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("\"factorials\":[1,1,1]"));
}

#[test]
fn environment_sets_policy() {
    arrayproc()
        .env("ARRAYPROC_OVERFLOW", "saturate")
        .arg("--no-prompt")
        .write_stdin("1 40")
        .assert()
        .success()
        .stdout(predicate::str::contains(u128::MAX.to_string()));
}

#[test]
fn invalid_log_level_is_a_config_error() {
    arrayproc()
        .args(["--log-level", "loud"])
        .write_stdin("0")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn precision_beyond_u16_is_a_config_error() {
    arrayproc()
        .args(["--no-prompt", "-p", "65536"])
        .write_stdin("2 1 2")
        .assert()
        .failure()
        .code(2);

    arrayproc()
        .env("ARRAYPROC_PRECISION", "70000")
        .arg("--no-prompt")
        .write_stdin("2 1 2")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn invalid_utf8_token_is_a_format_error() {
    arrayproc()
        .arg("--no-prompt")
        .write_stdin(b"2\n1 \xff\n".to_vec())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("expected an integer at token 3"));
}

#[test]
fn numeric_environment_flags() {
    arrayproc()
        .env("ARRAYPROC_NO_PROMPT", "1")
        .env("ARRAYPROC_LOG_LEVEL", "0")
        .write_stdin("1 3")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter").not())
        .stdout(predicate::str::contains("Factorials: [6]"));
}
