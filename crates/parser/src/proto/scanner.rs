//! Line-driven scan state machine
//!
//! A single forward pass over the source lines. Only the most recently
//! opened service absorbs new methods, and only the most recently
//! appended method absorbs a following HTTP binding; both targets are
//! tracked as explicit indices rather than re-derived from the output.

use grpc_gateway_generator_common::{HttpMethod, MethodDefinition, ServiceDefinition};
use regex::Regex;
use std::sync::OnceLock;

fn service_open_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*service\s+(\w+)\s*\{").expect("valid service regex"))
}

fn rpc_decl_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*rpc\s+(\w+)\s*\((\w+)\)\s+returns\s+\((\w+)\)\s*\{")
            .expect("valid rpc regex")
    })
}

fn http_option_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*option\s+\(google\.api\.http\)\s*=\s*\{").expect("valid option regex")
    })
}

fn http_binding_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)(get|post|put|delete):\s*"([^"]+)""#).expect("valid binding regex")
    })
}

fn path_param_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("valid param regex"))
}

/// Apply the HTTP binding rule to one line of option-block text
///
/// On a verb/path match the method's verb, path, and first `{param}`
/// placeholder are set together; on no match the method is left
/// untouched. Additional verb/path pairs or placeholders on the same
/// line are ignored.
pub(crate) fn apply_http_binding(method: &mut MethodDefinition, line: &str) {
    let Some(caps) = http_binding_re().captures(line) else {
        return;
    };

    // The capture group only matches known verbs.
    if let Some(verb) = HttpMethod::parse(&caps[1]) {
        method.http_method = verb;
    }
    method.path = caps[2].to_string();

    if let Some(param) = path_param_re().captures(&method.path) {
        method.param = Some(param[1].to_string());
    }
}

/// Single-pass scanner over proto source lines
pub(crate) struct LineScanner<'a> {
    lines: Vec<&'a str>,
    services: Vec<ServiceDefinition>,
    current_service: Option<usize>,
    current_method: Option<usize>,
}

impl<'a> LineScanner<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().collect(),
            services: Vec::new(),
            current_service: None,
            current_method: None,
        }
    }

    /// Run the scan, consuming the scanner
    pub(crate) fn scan(mut self) -> Vec<ServiceDefinition> {
        for idx in 0..self.lines.len() {
            let line = self.lines[idx];

            if let Some(caps) = service_open_re().captures(line) {
                self.services.push(ServiceDefinition::new(&caps[1]));
                self.current_service = Some(self.services.len() - 1);
                self.current_method = None;
            } else if let Some(caps) = rpc_decl_re().captures(line) {
                if let Some(service_idx) = self.current_service {
                    let methods = &mut self.services[service_idx].methods;
                    methods.push(MethodDefinition::new(&caps[1], &caps[2], &caps[3]));
                    self.current_method = Some(methods.len() - 1);
                }
            } else if http_option_re().is_match(line) {
                self.bind_current_method(idx);
            }
        }

        self.services
    }

    /// Resolve an option block opened at `open_idx` against the current
    /// method.
    ///
    /// The look-ahead takes the first following line containing a `}`
    /// character, which is not necessarily the line closing this option
    /// block. On multi-field bodies this can land on the wrong line; the
    /// behavior is kept as-is.
    fn bind_current_method(&mut self, open_idx: usize) {
        let (Some(service_idx), Some(method_idx)) = (self.current_service, self.current_method)
        else {
            return;
        };

        if let Some(binding_line) = self.lines[open_idx + 1..]
            .iter()
            .copied()
            .find(|l| l.contains('}'))
        {
            let method = &mut self.services[service_idx].methods[method_idx];
            apply_http_binding(method, binding_line);
        }
    }
}
