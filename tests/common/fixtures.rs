//! Reusable test content.

/// Stand-in for the platform CLI, run as `sh platform.sh <subcommand> ...`.
///
/// - `ls`: prints `status.<n>` for the n-th call, then `status.last`
/// - `logs`: records its arguments, prints `logs.txt` or exits 1
pub const FAKE_PLATFORM_CLI: &str = r#"dir="$(dirname "$0")"
case "$1" in
  ls)
    n=$(cat "$dir/calls" 2>/dev/null || echo 0)
    n=$((n + 1))
    echo "$n" > "$dir/calls"
    f="$dir/status.$n"
    [ -f "$f" ] || f="$dir/status.last"
    [ -f "$f" ] || exit 1
    cat "$f"
    ;;
  logs)
    shift
    echo "$@" > "$dir/logs_args"
    [ -f "$dir/logs.txt" ] || exit 1
    cat "$dir/logs.txt"
    ;;
  *)
    exit 2
    ;;
esac
"#;

/// `ls --json` output for a single deployment.
pub fn deployment_json(state: &str, url: &str) -> String {
    format!(
        r#"[{{"uid":"dpl_test","state":"{}","url":"{}","created":1700000000000}}]"#,
        state, url
    )
}

pub const APP_URL: &str = "myapp-abc123.vercel.app";

pub const BUILD_LOGS: &str = "Installing dependencies...\nerror: Module not found: 'left-pad'\nBuild failed";
