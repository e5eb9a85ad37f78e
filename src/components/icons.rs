//! Centralized icon definitions.
//!
//! Maps semantic icon names to the lucide set, so swapping an icon only
//! touches this file.

use icondata::Icon;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronRight as ChevronRight, LuCloudUpload as CloudUpload, LuExternalLink as ExternalLink,
        LuFile as File, LuFileImage as FileImage, LuFilePlus as FilePlus, LuFolder as Folder,
        LuFolderOpen as FolderOpen, LuFolderPlus as FolderPlus, LuLock as Lock, LuMoon as Moon,
        LuPanelLeft as PanelLeft, LuRotateCw as Reload, LuSearch as Search,
        LuSettings2 as FileConfig, LuSun as Sun, LuTrash2 as Trash, LuUpload as Upload, LuX as Close,
    };
}

// =============================================================================
// Icon Constants
// =============================================================================

macro_rules! icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = lucide::$theme_name;
    };
}

icon!(CHEVRON_RIGHT, ChevronRight);
icon!(CLOSE, Close);
icon!(CLOUD_UPLOAD, CloudUpload);
icon!(EXTERNAL_LINK, ExternalLink);
icon!(FILE, File);
icon!(FILE_CONFIG, FileConfig);
icon!(FILE_IMAGE, FileImage);
icon!(FILE_PLUS, FilePlus);
icon!(FOLDER, Folder);
icon!(FOLDER_OPEN, FolderOpen);
icon!(FOLDER_PLUS, FolderPlus);
icon!(LOCK, Lock);
icon!(MOON, Moon);
icon!(PANEL_LEFT, PanelLeft);
icon!(RELOAD, Reload);
icon!(SEARCH, Search);
icon!(SUN, Sun);
icon!(TRASH, Trash);
icon!(UPLOAD, Upload);
