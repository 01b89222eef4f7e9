use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_generate_manifest() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "src/legacy.html",
        r#"<span class="anticon anticon-cross-o"></span>"#,
    )?;
    test.write_file(
        "src/modern.html",
        r#"<i nz-icon [nzType]="'close'" [nzTheme]="'fill'"></i>"#,
    )?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 2 icons to ./src/ant-svg-icons.ts (2 source files scanned)

    ----- stderr -----
    ");

    let manifest = test.read_file("src/ant-svg-icons.ts")?;
    assert_eq!(
        manifest,
        "import {\n    CloseFill,\n    CloseOutline\n} from '@ant-design/icons-angular/icons';\n\nexport const ANT_ICONS = [\n    CloseFill,\n    CloseOutline\n];\n"
    );

    Ok(())
}

#[test]
fn test_generate_verbose_lists_icons() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file("src/app.html", r#"<i nz-icon nzType="home"></i>"#)?;

    assert_cmd_snapshot!(test.generate_command().arg("--verbose"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      HomeOutline
    ✓ Generated 1 icon to ./src/ant-svg-icons.ts (1 source file scanned)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_generate_dry_run_previews_without_writing() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "src/app.html",
        r#"<i nz-icon [nzType]="'close'" [nzTheme]="'fill'"></i>"#,
    )?;
    test.write_file("src/styles.less", ".anticon-home { color: red; }")?;

    assert_cmd_snapshot!(test.generate_command().arg("--dry-run"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      CloseFill
      HomeOutline
    Would generate 2 icons to ./src/ant-svg-icons.ts
    Run without --dry-run to write the manifest.

    ----- stderr -----
    ");

    assert!(!test.root().join("src/ant-svg-icons.ts").exists());

    Ok(())
}

#[test]
fn test_generate_empty_corpus() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file("src/app.html", "<div>No icons here</div>")?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 0 icons to ./src/ant-svg-icons.ts (1 source file scanned)

    ----- stderr -----
    ");

    let manifest = test.read_file("src/ant-svg-icons.ts")?;
    assert_eq!(
        manifest,
        "import {\n} from '@ant-design/icons-angular/icons';\n\nexport const ANT_ICONS = [\n];\n"
    );

    Ok(())
}

#[test]
fn test_generate_with_ignore_pattern() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file("src/app.html", r#"<i nz-icon nzType="home"></i>"#)?;
    test.write_file("src/app.spec.ts", r#"const cls = "anticon-bug";"#)?;

    assert_cmd_snapshot!(
        test.generate_command().args(["--ignore", "**/*.spec.ts"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 1 icon to ./src/ant-svg-icons.ts (1 source file scanned)

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_generate_with_project_override() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "angular.json",
        r#"{ "projects": { "docs": { "sourceRoot": "docs" } } }"#,
    )?;
    test.write_file("docs/page.html", r#"<i nz-icon nzType="user"></i>"#)?;

    assert_cmd_snapshot!(test.generate_command().args(["--project", "docs"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 1 icon to ./docs/ant-svg-icons.ts (1 source file scanned)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_generate_custom_output_filename() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file("src/app.html", r#"<i nz-icon nzType="home"></i>"#)?;

    assert_cmd_snapshot!(
        test.generate_command().args(["--output", "used-icons.ts"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 1 icon to ./src/used-icons.ts (1 source file scanned)

    ----- stderr -----
    "
    );

    assert!(test.root().join("src/used-icons.ts").exists());

    Ok(())
}

#[test]
fn test_missing_descriptor_fails() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: No angular.json found in .
    ");

    Ok(())
}

#[test]
fn test_missing_default_project_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "angular.json",
        r#"{ "projects": { "app": { "sourceRoot": "src" } } }"#,
    )?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: No [defaultProject] field in angular.json
    ");

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    A fast CLI tool for generating used-icon manifests in ng-zorro-antd Angular projects

    Usage: icongen [COMMAND]

    Commands:
      generate  Scan the project for icon usage and generate the manifest file
      help      Print this message or the help of the given subcommand(s)

    Options:
      -h, --help     Print help
      -V, --version  Print version

    ----- stderr -----
    ");

    Ok(())
}
