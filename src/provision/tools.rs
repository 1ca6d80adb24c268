//! Tool names and the commands issued on their behalf.

use crate::shell::CommandLine;

/// Version control; required for submodule provisioning.
pub const GIT: &str = "git";
/// JavaScript runtime; required for npm provisioning.
pub const NODE: &str = "node";
/// Node package manager.
pub const NPM: &str = "npm";
/// Ruby version manager, probed for information only.
pub const RVM: &str = "rvm";
/// RubyGems, probed for information only.
pub const GEM: &str = "gem";
/// Bundler, probed under its gem name.
pub const BUNDLER: &str = "bundler";

/// Submodule actions, in the order they are issued.
pub const SUBMODULE_ACTIONS: [&str; 3] = ["init", "sync", "update"];

/// `git submodule <action>`
pub fn submodule_command(action: &str) -> CommandLine {
    CommandLine::new(GIT).args(["submodule", action])
}

/// Treat a blank version as no version at all.
pub fn normalize_version(version: Option<&str>) -> Option<&str> {
    version.map(str::trim).filter(|v| !v.is_empty())
}

/// `gem install bundler [--version <v>] --no-rdoc --no-ri`
pub fn gem_install_bundler(version: Option<&str>) -> CommandLine {
    let mut cmd = CommandLine::new(GEM).args(["install", BUNDLER]);
    if let Some(v) = normalize_version(version) {
        cmd = cmd.args(["--version", v]);
    }
    cmd.args(["--no-rdoc", "--no-ri"])
}

/// `bundle install <extra_args...>`
pub fn bundle_install(extra_args: &[String]) -> CommandLine {
    CommandLine::new("bundle")
        .arg("install")
        .args(extra_args.iter().cloned())
}

/// `npm install`
pub fn npm_install() -> CommandLine {
    CommandLine::new(NPM).arg("install")
}
