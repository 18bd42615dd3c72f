//! Loads the shared stylesheet, navbar, and footer that surround every page.

use crate::error::ConvertError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the site root derived from the executable.
pub const SITE_ROOT_ENV: &str = "MD2HTML_SITE_ROOT";

pub const STYLESHEET_PATH: &str = "assets/css/main.css";
pub const NAVBAR_PATH: &str = "components/navbar.html";
pub const FOOTER_PATH: &str = "components/footer.html";

/// Locates the fragment files of a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    root: PathBuf,
}

impl SiteLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves the site root as the directory one level above the one holding
    /// the running executable, unless [`SITE_ROOT_ENV`] is set.
    ///
    /// Falls back to the current directory when the executable path cannot be
    /// determined.
    pub fn from_executable() -> Self {
        if let Some(root) = env::var_os(SITE_ROOT_ENV).filter(|value| !value.is_empty()) {
            return Self::new(root);
        }

        match env::current_exe() {
            Ok(exe) => Self::for_executable(&exe),
            Err(err) => {
                log::debug!("Cannot locate executable ({err}), using current directory");
                Self::new(".")
            }
        }
    }

    /// The layout for a tool installed at `exe`: the parent of its directory,
    /// or `.` when `exe` has no such ancestor.
    pub fn for_executable(exe: &Path) -> Self {
        let root = exe
            .parent()
            .and_then(Path::parent)
            .filter(|root| !root.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn stylesheet(&self) -> PathBuf {
        self.root.join(STYLESHEET_PATH)
    }

    pub fn navbar(&self) -> PathBuf {
        self.root.join(NAVBAR_PATH)
    }

    pub fn footer(&self) -> PathBuf {
        self.root.join(FOOTER_PATH)
    }

    /// Loads all three fragments. Missing files yield empty strings.
    pub fn load(&self) -> Result<Fragments, ConvertError> {
        Ok(Fragments {
            stylesheet: load_fragment(&self.stylesheet())?,
            navbar: load_fragment(&self.navbar())?,
            footer: load_fragment(&self.footer())?,
        })
    }
}

/// The raw text of the shared page fragments, inlined without escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub stylesheet: String,
    pub navbar: String,
    pub footer: String,
}

/// Reads a fragment as UTF-8, returning an empty string when the file does not exist.
///
/// Read failures on an existing path (permissions, invalid UTF-8) are errors.
pub fn load_fragment(path: &Path) -> Result<String, ConvertError> {
    if !path.exists() {
        log::debug!("Fragment {} not found, using empty content", path.display());
        return Ok(String::new());
    }

    fs::read_to_string(path).map_err(|source| ConvertError::ReadFragment {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use rstest::rstest;

    #[test]
    fn missing_fragment_is_empty_every_time() {
        let temp = assert_fs::TempDir::new().unwrap();
        let path = temp.child("components/navbar.html");

        for _ in 0..3 {
            assert_eq!(load_fragment(path.path()).unwrap(), "");
        }
    }

    #[test]
    fn reads_existing_fragment_verbatim() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("footer.html");
        file.write_str("<footer>\n  <p>&copy; Lado B</p>\n</footer>\n")
            .unwrap();

        assert_eq!(
            load_fragment(file.path()).unwrap(),
            "<footer>\n  <p>&copy; Lado B</p>\n</footer>\n"
        );
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("main.css");
        file.write_binary(&[0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = load_fragment(file.path()).unwrap_err();
        assert!(matches!(err, ConvertError::ReadFragment { .. }));
        assert!(err.to_string().contains("main.css"));
    }

    #[test]
    fn layout_resolves_fixed_relative_paths() {
        let layout = SiteLayout::new("/srv/site");

        assert_eq!(layout.stylesheet(), Path::new("/srv/site/assets/css/main.css"));
        assert_eq!(layout.navbar(), Path::new("/srv/site/components/navbar.html"));
        assert_eq!(layout.footer(), Path::new("/srv/site/components/footer.html"));
    }

    #[rstest]
    #[case::installed_tool("/site/tools/md2html", "/site")]
    #[case::nested_relative("site/Tools/md2html", "site")]
    #[case::relative_tool("Tools/md2html", ".")]
    #[case::root_level("/md2html", ".")]
    #[case::bare_name("md2html", ".")]
    fn executable_layout_uses_grandparent_directory(#[case] exe: &str, #[case] expected: &str) {
        let layout = SiteLayout::for_executable(Path::new(exe));
        assert_eq!(layout.root(), Path::new(expected));
    }

    #[test]
    fn layout_loads_present_and_missing_fragments() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child(STYLESHEET_PATH)
            .write_str("body { color: #fff; }")
            .unwrap();
        temp.child(NAVBAR_PATH).write_str("<nav>Home</nav>").unwrap();

        let fragments = SiteLayout::new(temp.path()).load().unwrap();

        assert_eq!(fragments.stylesheet, "body { color: #fff; }");
        assert_eq!(fragments.navbar, "<nav>Home</nav>");
        assert_eq!(fragments.footer, "");
    }
}
