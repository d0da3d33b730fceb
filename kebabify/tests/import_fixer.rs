use kebabify::{IMPORT_REPLACEMENTS, Statistics, TARGET_SUBTREE, fix_imports};
use std::fs;
use std::path::Path;

fn write(root: &Path, relative_path: &str, content: &str) {
    let path = root.join(TARGET_SUBTREE).join(relative_path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(root: &Path, relative_path: &str) -> String {
    fs::read_to_string(root.join(TARGET_SUBTREE).join(relative_path)).unwrap()
}

#[test]
fn rewrites_video_extension_import() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();
    write(root, "extensions/video/index.ts", "import X from './VideoExtension.js'\n");

    let mut statistics = Statistics::new();
    fix_imports(root, IMPORT_REPLACEMENTS, false, &mut statistics).unwrap();

    assert_eq!(read(root, "extensions/video/index.ts"), "import X from './video-extension.js'\n");
    assert_eq!(statistics.updated_files, 1);
}

#[test]
fn second_run_updates_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();
    write(
        root,
        "editor.ts",
        "import { AudioExtended } from './extensions/audio/AudiExtended.js';\nimport { IFrame } from './extensions/iframe/IFrame.js';\n",
    );
    write(root, "shadcn/editor.svelte", "<script>import { ImagePlaceholder } from '../extensions/image/ImagePlaceholder.js';</script>\n");
    write(root, "utils.ts", "export const noop = () => {};\n");

    let mut first = Statistics::new();
    fix_imports(root, IMPORT_REPLACEMENTS, false, &mut first).unwrap();
    let mut second = Statistics::new();
    fix_imports(root, IMPORT_REPLACEMENTS, false, &mut second).unwrap();

    assert_eq!(first.updated_files, 2);
    assert_eq!(second.updated_files, 0);
    assert_eq!(second.unchanged_files, 3);
    assert_eq!(
        read(root, "editor.ts"),
        "import { AudioExtended } from './extensions/audio/audio-extended.js';\nimport { IFrame } from './extensions/iframe/iframe.js';\n"
    );
}

#[test]
fn leaves_files_with_other_extensions_alone() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();
    write(root, "legacy.js", "import './VideoExtension.js';\n");
    write(root, "NOTES.md", "VideoExtension.js was renamed\n");

    let mut statistics = Statistics::new();
    fix_imports(root, IMPORT_REPLACEMENTS, false, &mut statistics).unwrap();

    assert_eq!(read(root, "legacy.js"), "import './VideoExtension.js';\n");
    assert_eq!(read(root, "NOTES.md"), "VideoExtension.js was renamed\n");
    assert_eq!(statistics.updated_files, 0);
}

#[test]
fn does_not_rename_anything() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();
    write(root, "extensions/ColorHighlighter.ts", "export * from './FindAndReplace.js';\n");

    fix_imports(root, IMPORT_REPLACEMENTS, false, &mut Statistics::new()).unwrap();

    assert_eq!(read(root, "extensions/ColorHighlighter.ts"), "export * from './find-and-replace.js';\n");
}
