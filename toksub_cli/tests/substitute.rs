use assert_cmd::Command;
use toksub_core::AnyEmptyResult;

fn toksub_cmd() -> Command {
	let mut cmd = Command::cargo_bin("toksub").expect("toksub binary should build");
	cmd.env("NO_COLOR", "1");
	cmd
}

#[test]
fn substitutes_defined_variables_from_stdin() -> AnyEmptyResult {
	let _ = toksub_cmd()
		.arg("-D")
		.arg("name=world")
		.write_stdin("hello ${name}\n")
		.assert()
		.success()
		.stdout("hello world\n");

	Ok(())
}

#[test]
fn substitutes_from_a_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("greeting.txt");
	std::fs::write(&input, "dear ${title} ${name},\n")?;

	let _ = toksub_cmd()
		.arg("-D")
		.arg("title=dr")
		.arg("-D")
		.arg("name=jones")
		.arg(&input)
		.assert()
		.success()
		.stdout("dear dr jones,\n");

	Ok(())
}

#[test]
fn undefined_placeholders_pass_through() -> AnyEmptyResult {
	let _ = toksub_cmd()
		.arg("-D")
		.arg("name=world")
		.write_stdin("${name} and ${missing}\n")
		.assert()
		.success()
		.stdout("world and ${missing}\n");

	Ok(())
}

#[test]
fn escaped_delimiters_stay_literal() -> AnyEmptyResult {
	let _ = toksub_cmd()
		.arg("-D")
		.arg("name=world")
		.write_stdin("\\${name} is not ${name}\n")
		.assert()
		.success()
		.stdout("${name} is not world\n");

	Ok(())
}

#[test]
fn enable_defaults_resolves_fallbacks() -> AnyEmptyResult {
	let _ = toksub_cmd()
		.arg("--enable-defaults")
		.write_stdin("${port:8080}\n")
		.assert()
		.success()
		.stdout("8080\n");

	let _ = toksub_cmd()
		.arg("--enable-defaults")
		.arg("-D")
		.arg("port=9000")
		.write_stdin("${port:8080}\n")
		.assert()
		.success()
		.stdout("9000\n");

	Ok(())
}

#[test]
fn custom_delimiters_are_honored() -> AnyEmptyResult {
	let _ = toksub_cmd()
		.arg("--open")
		.arg("{{")
		.arg("--close")
		.arg("}}")
		.arg("-D")
		.arg("name=world")
		.write_stdin("hello {{name}} / unknown {{other}}\n")
		.assert()
		.success()
		.stdout("hello world / unknown {{other}}\n");

	Ok(())
}

#[test]
fn no_vars_passes_everything_through() -> AnyEmptyResult {
	let _ = toksub_cmd()
		.arg("--no-vars")
		.arg("-D")
		.arg("name=world")
		.write_stdin("hello ${name}\n")
		.assert()
		.success()
		.stdout("hello ${name}\n");

	Ok(())
}

#[test]
fn malformed_definition_is_rejected() -> AnyEmptyResult {
	let _ = toksub_cmd()
		.arg("-D")
		.arg("no-equals-sign")
		.write_stdin("hello\n")
		.assert()
		.failure()
		.stderr(predicates::str::contains("expected `key=value`"));

	Ok(())
}

#[test]
fn missing_input_file_fails_with_nonzero_exit() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	let _ = toksub_cmd()
		.arg(tmp.path().join("does-not-exist.txt"))
		.assert()
		.failure()
		.code(2);

	Ok(())
}

#[test]
fn parses_key_value_definitions() {
	assert_eq!(
		toksub_cli::parse_key_value("key=value"),
		Ok(("key".to_string(), "value".to_string()))
	);
	assert_eq!(
		toksub_cli::parse_key_value("key=a=b"),
		Ok(("key".to_string(), "a=b".to_string()))
	);
	assert!(toksub_cli::parse_key_value("missing").is_err());
	assert!(toksub_cli::parse_key_value("=value").is_err());
}
