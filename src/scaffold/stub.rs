//! Class stubs for generated Saloon files.

/// Request class template.
pub const REQUEST_STUB: &str = r#"<?php

namespace {{ namespace }};

use Saloon\Enums\Method;
use Saloon\Http\Request;

class {{ class }} extends Request
{
    /**
     * The HTTP method of the request
     */
    protected Method $method = Method::{{ method }};

    /**
     * The endpoint for the request
     */
    public function resolveEndpoint(): string
    {
        return '/example';
    }
}
"#;

/// Fill a stub's `{{ key }}` placeholders.
pub fn fill(stub: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(stub.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{{ {key} }}}}"), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_every_occurrence() {
        let out = fill("{{ a }}-{{ b }}-{{ a }}", &[("a", "1"), ("b", "2")]);
        assert_eq!(out, "1-2-1");
    }

    #[test]
    fn test_unknown_placeholders_survive() {
        assert_eq!(fill("{{ other }}", &[("a", "1")]), "{{ other }}");
    }
}
