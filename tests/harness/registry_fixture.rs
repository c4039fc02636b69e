//! Minimal on-disk registry in the layout served by the public registry.

use std::fs;
use std::path::Path;

pub(crate) const CSS_VARS: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n\n@layer base {\n  :root {\n    --background: 0 0% 100%;\n    --radius: 0.5rem;\n  }\n}\n";
pub(crate) const INLINE_COLORS: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

pub(crate) fn write(root: &Path) {
    let styles = root.join("registry/styles");
    let colors = root.join("registry/colors");
    fs::create_dir_all(&styles).expect("Failed to create styles directory");
    fs::create_dir_all(&colors).expect("Failed to create colors directory");

    fs::write(
        styles.join("index.json"),
        r#"[{ "name": "default", "label": "Default" }, { "name": "new-york", "label": "New York" }]"#,
    )
    .expect("Failed to write style index");

    let templates = serde_json::json!({
        "inlineColorsTemplate": INLINE_COLORS,
        "cssVarsTemplate": CSS_VARS,
    });
    for name in ["slate", "zinc"] {
        fs::write(colors.join(format!("{name}.json")), templates.to_string())
            .expect("Failed to write base color");
    }
}
