use assert_cmd::Command;
use predicates::prelude::*;

fn bintext() -> Command {
    Command::cargo_bin("bintext").unwrap()
}

#[test]
fn test_enc_literal() {
    bintext()
        .args(["enc", "--codec", "base32", "-i", "Test"])
        .assert()
        .success()
        .stdout("KRSXG5A=\n");
}

#[test]
fn test_enc_from_stdin_with_wrapping() {
    bintext()
        .args(["enc", "--codec", "hex", "-w", "4"])
        .write_stdin("Test")
        .assert()
        .success()
        .stdout("5465\n7374\n");
}

#[test]
fn test_enc_partial_last_line_gets_one_newline() {
    bintext()
        .args(["enc", "--codec", "hex", "-w", "3", "-i", "Test"])
        .assert()
        .success()
        .stdout("546\n573\n74\n");
}

#[test]
fn test_dec_literal() {
    bintext()
        .args(["dec", "--codec", "base85", "-i", "<+U,m"])
        .assert()
        .success()
        .stdout("Test");
}

#[test]
fn test_conv() {
    bintext()
        .args(["conv", "--from", "base64", "--to", "base91", "-i", "VGVzdA=="])
        .assert()
        .success()
        .stdout("\"ONKd\n");
}

#[test]
fn test_dec_invalid_input_exit_code() {
    bintext()
        .args(["dec", "--codec", "base16", "-i", "zz"])
        .assert()
        .code(10)
        .stderr(predicate::str::contains("invalid character 'z' at position 0"));
}

#[test]
fn test_unknown_codec_exit_code() {
    bintext()
        .args(["enc", "--codec", "base58", "-i", "Test"])
        .assert()
        .code(13)
        .stderr(predicate::str::contains("unsupported codec: base58"));
}

#[test]
fn test_missing_input_file_exit_code() {
    bintext()
        .args(["enc", "-i", "@/nonexistent/bintext/input.bin"])
        .assert()
        .code(12);
}

#[test]
fn test_list() {
    bintext()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("base02").and(predicate::str::contains("base91")));
}

#[test]
fn test_list_json() {
    let output = bintext().args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    let codecs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(codecs.as_array().unwrap().len(), 8);
    assert_eq!(codecs[4]["name"], "base32");
    assert_eq!(codecs[4]["kind"], "base32");
}

#[test]
fn test_info() {
    bintext()
        .args(["info", "ascii85"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:        base85"));
}

#[test]
fn test_verify() {
    bintext()
        .args(["verify", "--codec", "base32", "-i", "KRSXG5A="])
        .assert()
        .success()
        .stdout("valid\n");

    bintext()
        .args(["verify", "--codec", "base32", "-i", "KRSX!5A="])
        .assert()
        .code(10)
        .stdout("invalid\n");
}

#[test]
fn test_verify_json_reports_error() {
    let output = bintext()
        .args(["verify", "--codec", "base85", "-i", "<+U,m<", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["valid"], false);
    assert!(result["error"].as_str().unwrap().starts_with("invalid length"));
}
