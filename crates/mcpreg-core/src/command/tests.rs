//! Tests for the command module.

use super::*;
use crate::config::LaunchKind;

mod npx_command_tests {
    use super::*;

    #[test]
    fn parse_full_command_with_prefix() {
        let record =
            parse_command("claude mcp add supabase -- npx -y @supabase/mcp-server-supabase@latest")
                .unwrap();

        assert_eq!(record.name, "supabase");
        assert_eq!(record.kind, LaunchKind::Npx);
        assert_eq!(record.target, "supabase/mcp-server-supabase@latest");
        assert_eq!(record.extra_args, "");
    }

    #[test]
    fn parse_without_prefix() {
        let record = parse_command("puppeteer -- npx -y @modelcontextprotocol/server-puppeteer")
            .unwrap();

        assert_eq!(record.name, "puppeteer");
        assert_eq!(record.kind, LaunchKind::Npx);
        assert_eq!(record.target, "modelcontextprotocol/server-puppeteer");
    }

    #[test]
    fn parse_without_y_flag() {
        let record = parse_command("github -- npx @github/mcp-server@latest").unwrap();

        assert_eq!(record.target, "github/mcp-server@latest");
        assert_eq!(record.extra_args, "");
    }

    #[test]
    fn parse_unscoped_package() {
        let record = parse_command("local -- npx -y my-server --port 3000").unwrap();

        assert_eq!(record.target, "my-server");
        assert_eq!(record.extra_args, "--port 3000");
    }

    #[test]
    fn trailing_arguments_preserved_verbatim() {
        let record =
            parse_command("fs -- npx -y @modelcontextprotocol/server-filesystem /tmp /home")
                .unwrap();

        assert_eq!(record.extra_args, "/tmp /home");
    }

    #[test]
    fn missing_package_rejected() {
        let err = parse_command("empty -- npx -y").unwrap_err();

        assert!(matches!(err, ParseError::MissingPackage(_)));
    }
}

mod env_command_tests {
    use super::*;

    #[test]
    fn parse_env_launch() {
        let record = parse_command(
            "digitalocean -- env DIGITALOCEAN_API_TOKEN=your-token npx -y @digitalocean/mcp",
        )
        .unwrap();

        assert_eq!(record.name, "digitalocean");
        assert_eq!(record.kind, LaunchKind::Env);
        assert_eq!(record.target, "DIGITALOCEAN_API_TOKEN=your-token");
        assert_eq!(record.extra_args, "npx -y @digitalocean/mcp");
    }

    #[test]
    fn value_may_contain_equals() {
        let record = parse_command("svc -- env TOKEN=abc=def run").unwrap();

        assert_eq!(record.target, "TOKEN=abc=def");
        assert_eq!(record.extra_args, "run");
    }

    #[test]
    fn missing_assignment_rejected() {
        let err = parse_command("svc -- env npx -y @scope/pkg").unwrap_err();

        assert!(matches!(err, ParseError::InvalidEnvAssignment(_)));
    }

    #[test]
    fn empty_value_rejected() {
        let err = parse_command("svc -- env TOKEN= run").unwrap_err();

        assert!(matches!(err, ParseError::InvalidEnvAssignment(_)));
    }
}

mod separator_tests {
    use super::*;

    #[test]
    fn missing_separator_rejected() {
        let err = parse_command("supabase npx -y @supabase/mcp").unwrap_err();

        assert!(matches!(err, ParseError::MissingSeparator(_)));
    }

    #[test]
    fn embedded_dashes_do_not_separate() {
        let err = parse_command("my--server npx").unwrap_err();

        assert!(matches!(err, ParseError::MissingSeparator(_)));
    }

    #[test]
    fn separator_inside_name_token_skipped() {
        let record = parse_command("my--server -- npx -y @scope/pkg").unwrap();

        assert_eq!(record.name, "my--server");
        assert_eq!(record.target, "scope/pkg");
    }

    #[test]
    fn trailing_separator_rejected() {
        let err = parse_command("supabase --").unwrap_err();

        assert!(matches!(err, ParseError::MissingSeparator(_)));
    }
}

mod name_tests {
    use super::*;

    #[test]
    fn quoted_name_is_unquoted() {
        let record = parse_command("\"supabase\" -- npx -y @supabase/mcp").unwrap();

        assert_eq!(record.name, "supabase");
    }

    #[test]
    fn empty_name_rejected() {
        let err = parse_command("\"\" -- npx -y @scope/pkg").unwrap_err();

        assert!(matches!(err, ParseError::EmptyName(_)));
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        let record = parse_command("   linear   -- npx -y @linear/mcp   ").unwrap();

        assert_eq!(record.name, "linear");
        assert_eq!(record.target, "linear/mcp");
    }
}

mod launch_type_tests {
    use super::*;

    #[test]
    fn unknown_launch_type_rejected() {
        let err = parse_command("svc -- docker run my-image").unwrap_err();

        assert_eq!(err, ParseError::UnknownLaunchType("docker".to_string()));
    }

    #[test]
    fn launch_type_is_token_matched() {
        // "npxfoo" is not the npx keyword
        let err = parse_command("svc -- npxfoo bar").unwrap_err();

        assert!(matches!(err, ParseError::UnknownLaunchType(_)));
    }

    #[test]
    fn error_carries_offending_token() {
        let err = parse_command("svc -- uvx some-tool").unwrap_err();

        assert_eq!(err.to_string(), "unknown launch type 'uvx' (must be npx or env)");
    }
}
