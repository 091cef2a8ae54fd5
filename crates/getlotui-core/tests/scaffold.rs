//! End-to-end init/add runs against temporary projects and the bundled templates

use getlotui_core::commands::{run_add, run_init, AddOutcome, InitOutcome};
use getlotui_core::styles::stylesheet::TOKEN_MARKER;
use getlotui_core::{
    get_component_dependencies, Adapter, InstallOutcome, PackageInstaller, PackageManager,
    ProjectConfig, TemplateFetcher, TemplateSource, CONFIG_FILE_NAME,
};
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Stands in for the package manager
#[derive(Default)]
struct FakeInstaller {
    installs: Mutex<Vec<Vec<String>>>,
}

impl PackageInstaller for FakeInstaller {
    async fn install(
        &self,
        packages: &[String],
        _cwd: &Path,
        _package_manager: PackageManager,
    ) -> InstallOutcome {
        self.installs.lock().unwrap().push(packages.to_vec());
        InstallOutcome::Installed
    }
}

fn next_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("package.json"),
        r#"{"dependencies": {"next": "14.0.0"}}"#,
    )
    .unwrap();
    dir
}

#[tokio::test]
async fn init_scaffolds_a_next_project() {
    let dir = next_project();
    let installer = FakeInstaller::default();

    let outcome = run_init(dir.path(), &installer).await.unwrap();
    assert!(matches!(outcome, InitOutcome::Initialized(_)));

    let config: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap(),
    )
    .unwrap();
    assert_eq!(config["adapter"], "web");
    assert_eq!(config["packageManager"], "npm");

    let theme = std::fs::read_to_string(dir.path().join("theme/config.ts")).unwrap();
    assert!(theme.contains("export const theme"));

    let utils = std::fs::read_to_string(dir.path().join("lib/utils.ts")).unwrap();
    assert!(utils.contains("export function cn"));

    let css = std::fs::read_to_string(dir.path().join("app/globals.css")).unwrap();
    assert_eq!(css.matches("@tailwind base;").count(), 1);
    assert_eq!(css.matches("@tailwind utilities;").count(), 1);
    assert_eq!(css.matches(TOKEN_MARKER).count(), 1);

    let tailwind = std::fs::read_to_string(dir.path().join("tailwind.config.js")).unwrap();
    assert_eq!(tailwind.matches("./components/ui").count(), 1);

    assert_eq!(installer.installs.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn init_then_add_button_twice() {
    let dir = next_project();
    let installer = FakeInstaller::default();
    let fetcher = TemplateFetcher::new(TemplateSource::bundled());

    run_init(dir.path(), &installer).await.unwrap();

    let template = std::fs::read_to_string(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("templates/web/Button.tsx"),
    )
    .unwrap();
    let target = dir.path().join("components/ui/Button.tsx");

    for _ in 0..2 {
        let outcome = run_add(dir.path(), "button", &fetcher, &installer)
            .await
            .unwrap();
        assert!(matches!(outcome, AddOutcome::Added { .. }));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), template);
    }

    let installs = installer.installs.lock().unwrap();
    assert_eq!(installs.len(), 3);
    assert_eq!(installs[1], get_component_dependencies("Button"));
}

#[tokio::test]
async fn add_unknown_component_leaves_project_untouched() {
    let dir = next_project();
    let installer = FakeInstaller::default();
    let fetcher = TemplateFetcher::new(TemplateSource::bundled());

    run_init(dir.path(), &installer).await.unwrap();
    let outcome = run_add(dir.path(), "carousel", &fetcher, &installer)
        .await
        .unwrap();

    assert!(matches!(outcome, AddOutcome::NotFound { .. }));
    assert!(!dir.path().join("components/ui").exists());
}

#[tokio::test]
async fn flutter_project_gets_dart_components() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("pubspec.yaml"), "name: catalog\n").unwrap();
    let installer = FakeInstaller::default();
    let fetcher = TemplateFetcher::new(TemplateSource::bundled());

    run_init(dir.path(), &installer).await.unwrap();
    let config = ProjectConfig::load(dir.path()).await.unwrap();
    assert_eq!(config.adapter, Adapter::Flutter);

    let outcome = run_add(dir.path(), "card", &fetcher, &installer)
        .await
        .unwrap();
    let AddOutcome::Added { path, import_hint, .. } = outcome else {
        panic!("expected card to be added");
    };
    assert_eq!(path, dir.path().join("lib/components/Card.dart"));
    assert_eq!(import_hint, "import 'package:catalog/components/Card.dart';");
    assert!(installer.installs.lock().unwrap().is_empty());
}
