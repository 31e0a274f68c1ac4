use assert_cmd::cargo::cargo_bin_cmd;

#[test]
fn top_level_help_lists_commands() {
    let mut cmd = cargo_bin_cmd!("marqueectl");
    let output = cmd.arg("--help").assert().success().get_output().stdout.clone();
    let text = String::from_utf8_lossy(&output);
    for command in ["rows", "search", "detail", "simulate", "prefs", "action", "config"] {
        assert!(text.contains(command), "help missing '{command}'");
    }
    assert!(text.contains("--catalog"), "help missing --catalog");
}

#[test]
fn simulate_help_documents_steps() {
    let mut cmd = cargo_bin_cmd!("marqueectl");
    let out = cmd
        .arg("simulate")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("--viewport"), "simulate help missing --viewport");
    assert!(text.contains("wheel:<dy>"), "simulate help missing step syntax");
}

#[test]
fn prefs_subcommands_present() {
    let mut cmd = cargo_bin_cmd!("marqueectl");
    let out = cmd
        .arg("prefs")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);
    for sub in ["show", "add", "remove", "like", "dislike", "unrate"] {
        assert!(text.contains(sub), "prefs help missing {sub}");
    }
}
