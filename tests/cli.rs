//! CLI tests — runs the built binary against the fixture project lists.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const ERROR_MESSAGE: &str = "Error loading gallery. Please refresh the page.";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_project-gallery"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run project-gallery")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Everything between the gallery container's opening tag and `</main>`.
fn container_content(html: &str) -> &str {
    let attr = html
        .find(r#"id="gallery-container""#)
        .expect("no gallery container");
    let start = attr + html[attr..].find('>').unwrap() + 1;
    let end = start + html[start..].find("</main>").unwrap();
    &html[start..end]
}

#[test]
fn build_renders_cards_newest_first() {
    let tmp = TempDir::new().unwrap();
    let projects = fixture("projects.json");
    let out = run(
        &["build", "--projects", projects.to_str().unwrap()],
        tmp.path(),
    );
    assert!(out.status.success(), "build failed: {}", stdout(&out));

    let html = std::fs::read_to_string(tmp.path().join("dist/index.html")).unwrap();
    let positions: Vec<usize> = ["harbor-lights", "night-market", "field-notes"]
        .iter()
        .map(|id| html.find(&format!(r#"data-project="{id}""#)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(html.contains("March 2024"));
    assert!(html.contains("June 2023"));
    assert!(html.contains(r#"href="https://example.com/harbor-lights""#));
    assert!(!html.contains(ERROR_MESSAGE));
    assert!(stdout(&out).contains("Generated 3 cards"));
}

#[test]
fn build_with_broken_projects_writes_error_page_and_fails() {
    let tmp = TempDir::new().unwrap();
    let projects = fixture("broken-projects.json");
    let out = run(
        &["build", "--projects", projects.to_str().unwrap()],
        tmp.path(),
    );
    assert!(!out.status.success());

    let html = std::fs::read_to_string(tmp.path().join("dist/index.html")).unwrap();
    assert_eq!(
        container_content(&html),
        format!("<p>{ERROR_MESSAGE}</p></div>")
    );
    assert!(!html.contains("data-project="));
}

#[test]
fn build_embeds_slideshow_runtime_with_config_timings() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("gallery.toml"),
        "[slideshow]\nautoplay_interval_ms = 5000\n",
    )
    .unwrap();
    let projects = fixture("projects.json");
    let out = run(
        &["build", "--projects", projects.to_str().unwrap()],
        tmp.path(),
    );
    assert!(out.status.success());

    let html = std::fs::read_to_string(tmp.path().join("dist/index.html")).unwrap();
    assert!(html.contains(r#"data-autoplay-ms="5000""#));
    assert!(html.contains(r#"data-settle-ms="450""#));
    assert!(html.contains("<script>"));
    assert!(html.contains("setInterval(next, autoplayMs)"));
}

#[test]
fn build_honours_config_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("gallery.toml"),
        "title = \"Selected Work\"\n",
    )
    .unwrap();
    let projects = fixture("projects.json");
    let out = run(
        &["build", "--projects", projects.to_str().unwrap()],
        tmp.path(),
    );
    assert!(out.status.success());
    let html = std::fs::read_to_string(tmp.path().join("dist/index.html")).unwrap();
    assert!(html.contains("<title>Selected Work</title>"));
}

#[test]
fn build_rejects_invalid_config() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("gallery.toml"),
        "[slideshow]\nsettle_ms = 5\n",
    )
    .unwrap();
    let projects = fixture("projects.json");
    let out = run(
        &["build", "--projects", projects.to_str().unwrap()],
        tmp.path(),
    );
    assert!(!out.status.success());
    assert!(!tmp.path().join("dist/index.html").exists());
}

#[test]
fn check_prints_inventory() {
    let tmp = TempDir::new().unwrap();
    let projects = fixture("projects.json");
    let out = run(
        &["check", "--projects", projects.to_str().unwrap()],
        tmp.path(),
    );
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("001 Harbor Lights (6 images)"));
    assert!(text.contains("003 Field Notes (3 images)"));
    assert!(text.contains("==> 3 projects are valid"));
}

#[test]
fn simulate_replays_script() {
    let tmp = TempDir::new().unwrap();
    let projects = fixture("projects.json");
    let out = run(
        &[
            "simulate",
            "--projects",
            projects.to_str().unwrap(),
            "--project",
            "harbor-lights",
            "--script",
            "enter, wait 9450",
        ],
        tmp.path(),
    );
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("slide 2 \u{2192} 3 (next)"));
    assert!(text.contains("==> harbor-lights at image 4 of 6"));
}

#[test]
fn simulate_rejects_unbounded_wait() {
    let tmp = TempDir::new().unwrap();
    let projects = fixture("projects.json");
    let out = run(
        &[
            "simulate",
            "--projects",
            projects.to_str().unwrap(),
            "--project",
            "harbor-lights",
            "--script",
            "wait 5, wait 18446744073709551615",
        ],
        tmp.path(),
    );
    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
}

#[test]
fn simulate_unknown_project_fails() {
    let tmp = TempDir::new().unwrap();
    let projects = fixture("projects.json");
    let out = run(
        &[
            "simulate",
            "--projects",
            projects.to_str().unwrap(),
            "--project",
            "nope",
            "--script",
            "next",
        ],
        tmp.path(),
    );
    assert!(!out.status.success());
}

#[test]
fn gen_config_prints_stock_toml() {
    let tmp = TempDir::new().unwrap();
    let out = run(&["gen-config"], tmp.path());
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("[slideshow]"));
    assert!(text.contains("autoplay_interval_ms = 3000"));
}
