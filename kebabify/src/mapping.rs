#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameEntry {
    pub source: &'static str,
    pub destination: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
    pub old: &'static str,
    pub new: &'static str,
}

const fn rename(source: &'static str, destination: &'static str) -> RenameEntry {
    RenameEntry { source, destination }
}

const fn replace(old: &'static str, new: &'static str) -> Replacement {
    Replacement { old, new }
}

/// Relative to the project root.
pub const TARGET_SUBTREE: &str = "src/lib/components/edra";

pub const TARGET_EXTENSIONS: [&str; 2] = ["ts", "svelte"];

pub const RENAMES: &[RenameEntry] = &[
    // components
    rename("src/lib/components/edra/components/MediaPlaceHolder.svelte", "src/lib/components/edra/components/media-placeholder.svelte"),
    rename("src/lib/components/edra/components/BubbleMenu.svelte", "src/lib/components/edra/components/bubble-menu.svelte"),
    rename("src/lib/components/edra/components/DragHandle.svelte", "src/lib/components/edra/components/drag-handle.svelte"),
    // extensions
    rename("src/lib/components/edra/extensions/FindAndReplace.ts", "src/lib/components/edra/extensions/find-and-replace.ts"),
    rename("src/lib/components/edra/extensions/InlineMathReplacer.ts", "src/lib/components/edra/extensions/inline-math-replacer.ts"),
    rename("src/lib/components/edra/extensions/ColorHighlighter.ts", "src/lib/components/edra/extensions/color-highlighter.ts"),
    rename("src/lib/components/edra/extensions/video/VideoPlaceholder.ts", "src/lib/components/edra/extensions/video/video-placeholder.ts"),
    rename("src/lib/components/edra/extensions/video/VideoExtension.ts", "src/lib/components/edra/extensions/video/video-extension.ts"),
    rename("src/lib/components/edra/extensions/video/VideoExtended.ts", "src/lib/components/edra/extensions/video/video-extended.ts"),
    rename("src/lib/components/edra/extensions/iframe/IFramePlaceholder.ts", "src/lib/components/edra/extensions/iframe/iframe-placeholder.ts"),
    rename("src/lib/components/edra/extensions/iframe/IFrame.ts", "src/lib/components/edra/extensions/iframe/iframe.ts"),
    rename("src/lib/components/edra/extensions/iframe/IFrameExtended.ts", "src/lib/components/edra/extensions/iframe/iframe-extended.ts"),
    rename("src/lib/components/edra/extensions/audio/AudioPlaceholder.ts", "src/lib/components/edra/extensions/audio/audio-placeholder.ts"),
    // "AudiExtended" spelling kept as in the original table
    rename("src/lib/components/edra/extensions/audio/AudiExtended.ts", "src/lib/components/edra/extensions/audio/audio-extended.ts"),
    rename("src/lib/components/edra/extensions/audio/AudioExtension.ts", "src/lib/components/edra/extensions/audio/audio-extension.ts"),
    rename("src/lib/components/edra/extensions/image/ImageExtended.ts", "src/lib/components/edra/extensions/image/image-extended.ts"),
    rename("src/lib/components/edra/extensions/image/ImagePlaceholder.ts", "src/lib/components/edra/extensions/image/image-placeholder.ts"),
    rename("src/lib/components/edra/extensions/drag-handle/ClipboardSerializer.ts", "src/lib/components/edra/extensions/drag-handle/clipboard-serializer.ts"),
    // shadcn components
    rename("src/lib/components/edra/shadcn/components/IFrameExtended.svelte", "src/lib/components/edra/shadcn/components/iframe-extended.svelte"),
    rename("src/lib/components/edra/shadcn/components/VideoExtended.svelte", "src/lib/components/edra/shadcn/components/video-extended.svelte"),
    rename("src/lib/components/edra/shadcn/components/VideoPlaceholder.svelte", "src/lib/components/edra/shadcn/components/video-placeholder.svelte"),
    rename("src/lib/components/edra/shadcn/components/EdraToolTip.svelte", "src/lib/components/edra/shadcn/components/edra-tooltip.svelte"),
    rename("src/lib/components/edra/shadcn/components/IFramePlaceHolder.svelte", "src/lib/components/edra/shadcn/components/iframe-placeholder.svelte"),
    rename("src/lib/components/edra/shadcn/components/ImagePlaceholder.svelte", "src/lib/components/edra/shadcn/components/image-placeholder.svelte"),
    rename("src/lib/components/edra/shadcn/components/MediaExtended.svelte", "src/lib/components/edra/shadcn/components/media-extended.svelte"),
    rename("src/lib/components/edra/shadcn/components/CodeBlock.svelte", "src/lib/components/edra/shadcn/components/code-block.svelte"),
    rename("src/lib/components/edra/shadcn/components/AudioExtended.svelte", "src/lib/components/edra/shadcn/components/audio-extended.svelte"),
    rename("src/lib/components/edra/shadcn/components/SlashCommandList.svelte", "src/lib/components/edra/shadcn/components/slash-command-list.svelte"),
    rename("src/lib/components/edra/shadcn/components/AudioPlaceHolder.svelte", "src/lib/components/edra/shadcn/components/audio-placeholder.svelte"),
    rename("src/lib/components/edra/shadcn/components/ImageExtended.svelte", "src/lib/components/edra/shadcn/components/image-extended.svelte"),
    rename("src/lib/components/edra/shadcn/components/ToolBarIcon.svelte", "src/lib/components/edra/shadcn/components/toolbar-icon.svelte"),
    // shadcn toolbar
    rename("src/lib/components/edra/shadcn/components/toolbar/Alignment.svelte", "src/lib/components/edra/shadcn/components/toolbar/alignment.svelte"),
    rename("src/lib/components/edra/shadcn/components/toolbar/QuickColors.svelte", "src/lib/components/edra/shadcn/components/toolbar/quick-colors.svelte"),
    rename("src/lib/components/edra/shadcn/components/toolbar/Headings.svelte", "src/lib/components/edra/shadcn/components/toolbar/headings.svelte"),
    rename("src/lib/components/edra/shadcn/components/toolbar/SearchAndReplace.svelte", "src/lib/components/edra/shadcn/components/toolbar/search-and-replace.svelte"),
    rename("src/lib/components/edra/shadcn/components/toolbar/FontSize.svelte", "src/lib/components/edra/shadcn/components/toolbar/font-size.svelte"),
    // shadcn menus
    rename("src/lib/components/edra/shadcn/menus/TableRow.svelte", "src/lib/components/edra/shadcn/menus/table-row.svelte"),
    rename("src/lib/components/edra/shadcn/menus/TableCol.svelte", "src/lib/components/edra/shadcn/menus/table-col.svelte"),
    rename("src/lib/components/edra/shadcn/menus/Menu.svelte", "src/lib/components/edra/shadcn/menus/menu.svelte"),
    rename("src/lib/components/edra/shadcn/menus/Link.svelte", "src/lib/components/edra/shadcn/menus/link.svelte"),
];

// "BubbleMenu.svelte" has to come before "Menu.svelte"
pub const FILENAME_REPLACEMENTS: &[Replacement] = &[
    replace("MediaPlaceHolder.svelte", "media-placeholder.svelte"),
    replace("BubbleMenu.svelte", "bubble-menu.svelte"),
    replace("DragHandle.svelte", "drag-handle.svelte"),
    replace("FindAndReplace.ts", "find-and-replace.ts"),
    replace("InlineMathReplacer.ts", "inline-math-replacer.ts"),
    replace("ColorHighlighter.ts", "color-highlighter.ts"),
    replace("VideoPlaceholder.ts", "video-placeholder.ts"),
    replace("VideoExtension.ts", "video-extension.ts"),
    replace("VideoExtended.ts", "video-extended.ts"),
    replace("IFramePlaceholder.ts", "iframe-placeholder.ts"),
    replace("IFrame.ts", "iframe.ts"),
    replace("IFrameExtended.ts", "iframe-extended.ts"),
    replace("AudioPlaceholder.ts", "audio-placeholder.ts"),
    replace("AudiExtended.ts", "audio-extended.ts"),
    replace("AudioExtension.ts", "audio-extension.ts"),
    replace("ImageExtended.ts", "image-extended.ts"),
    replace("ImagePlaceholder.ts", "image-placeholder.ts"),
    replace("ClipboardSerializer.ts", "clipboard-serializer.ts"),
    replace("IFrameExtended.svelte", "iframe-extended.svelte"),
    replace("VideoExtended.svelte", "video-extended.svelte"),
    replace("VideoPlaceholder.svelte", "video-placeholder.svelte"),
    replace("EdraToolTip.svelte", "edra-tooltip.svelte"),
    replace("IFramePlaceHolder.svelte", "iframe-placeholder.svelte"),
    replace("ImagePlaceholder.svelte", "image-placeholder.svelte"),
    replace("MediaExtended.svelte", "media-extended.svelte"),
    replace("CodeBlock.svelte", "code-block.svelte"),
    replace("AudioExtended.svelte", "audio-extended.svelte"),
    replace("SlashCommandList.svelte", "slash-command-list.svelte"),
    replace("AudioPlaceHolder.svelte", "audio-placeholder.svelte"),
    replace("ImageExtended.svelte", "image-extended.svelte"),
    replace("ToolBarIcon.svelte", "toolbar-icon.svelte"),
    replace("Alignment.svelte", "alignment.svelte"),
    replace("QuickColors.svelte", "quick-colors.svelte"),
    replace("Headings.svelte", "headings.svelte"),
    replace("SearchAndReplace.svelte", "search-and-replace.svelte"),
    replace("FontSize.svelte", "font-size.svelte"),
    replace("TableRow.svelte", "table-row.svelte"),
    replace("TableCol.svelte", "table-col.svelte"),
    replace("Menu.svelte", "menu.svelte"),
    replace("Link.svelte", "link.svelte"),
];

pub const IMPORT_REPLACEMENTS: &[Replacement] = &[
    replace("ColorHighlighter.js", "color-highlighter.js"),
    replace("FindAndReplace.js", "find-and-replace.js"),
    replace("InlineMathReplacer.js", "inline-math-replacer.js"),
    replace("VideoPlaceholder.js", "video-placeholder.js"),
    replace("VideoExtension.js", "video-extension.js"),
    replace("VideoExtended.js", "video-extended.js"),
    replace("IFramePlaceholder.js", "iframe-placeholder.js"),
    replace("IFrame.js", "iframe.js"),
    replace("IFrameExtended.js", "iframe-extended.js"),
    replace("AudioPlaceholder.js", "audio-placeholder.js"),
    replace("AudiExtended.js", "audio-extended.js"),
    replace("AudioExtension.js", "audio-extension.js"),
    replace("ImageExtended.js", "image-extended.js"),
    replace("ImagePlaceholder.js", "image-placeholder.js"),
    replace("ClipboardSerializer.js", "clipboard-serializer.js"),
];
