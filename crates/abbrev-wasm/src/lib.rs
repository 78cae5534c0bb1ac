// WASM bindings for abbreviation-aware string equivalence.
//
// Provides a `WasmMatcher` class exported via wasm-bindgen that wraps the
// `Matcher` from abbrev-search. Traces are serialized to JavaScript values
// using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const m = new WasmMatcher();                       // built-in corpus
//   m.compare("Foobar Rd", "Foobar Road");            // => true
//   const custom = WasmMatcher.fromClasses([["street", "st"], ["north", "n"]]);
//   custom.trace("N St", "North Street");             // => { verdict: "MATCH", pops: [...], ... }
//   custom.rules("n st");                             // => { st: ["street"], n: ["north"], " ": [...], ... }

use serde::Serialize;
use wasm_bindgen::prelude::*;

use abbrev_core::EquivalenceClass;
use abbrev_rules::{FilteredRuleTable, RuleKind};
use abbrev_search::{
    Matcher, SearchOptions, SearchOutcome, Termination, TraceEvent, TraceRecorder,
};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of one filtered rule.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsRule {
    trigger: String,
    replacements: Vec<String>,
    kind: &'static str,
}

/// Serializable representation of a popped search state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsPop {
    direction: &'static str,
    confirmed: String,
    remainder: String,
    remaining: usize,
}

/// Serializable representation of a traced comparison.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTrace {
    verdict: &'static str,
    termination: &'static str,
    /// Direction that reached its goal, if any.
    found_by: Option<&'static str>,
    expansions: usize,
    conclusive: bool,
    forward_rules: Vec<JsRule>,
    backward_rules: Vec<JsRule>,
    pops: Vec<JsPop>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn kind_to_str(kind: RuleKind) -> &'static str {
    match kind {
        RuleKind::Class => "class",
        RuleKind::Structural => "structural",
    }
}

fn termination_to_str(termination: Termination) -> &'static str {
    match termination {
        Termination::Identical => "identical",
        Termination::Found(_) => "found",
        Termination::Exhausted => "exhausted",
        Termination::Abandoned => "abandoned",
    }
}

fn rules_to_js(rules: &FilteredRuleTable) -> Vec<JsRule> {
    rules
        .iter()
        .map(|rule| JsRule {
            trigger: rule.trigger.clone(),
            replacements: rule.replacements.clone(),
            kind: kind_to_str(rule.kind),
        })
        .collect()
}

fn build_trace(outcome: &SearchOutcome, events: &[TraceEvent]) -> JsTrace {
    let mut trace = JsTrace {
        verdict: outcome.verdict.as_str(),
        termination: termination_to_str(outcome.termination),
        found_by: match outcome.termination {
            Termination::Found(direction) => Some(direction.as_str()),
            _ => None,
        },
        expansions: outcome.expansions,
        conclusive: outcome.is_conclusive(),
        forward_rules: Vec::new(),
        backward_rules: Vec::new(),
        pops: Vec::new(),
    };
    for event in events {
        match event {
            TraceEvent::Rules { direction, rules } => match direction {
                abbrev_core::Direction::Forward => trace.forward_rules = rules_to_js(rules),
                abbrev_core::Direction::Backward => trace.backward_rules = rules_to_js(rules),
            },
            TraceEvent::Pop { direction, state } => trace.pops.push(JsPop {
                direction: direction.as_str(),
                confirmed: state.confirmed().to_string(),
                remainder: state.remainder().to_string(),
                remaining: state.priority(),
            }),
            TraceEvent::Finish(_) => {}
        }
    }
    trace
}

fn parse_classes(lists: Vec<Vec<String>>) -> Result<Vec<EquivalenceClass>, String> {
    EquivalenceClass::from_lists(&lists).map_err(|e| e.to_string())
}

// ============================================================================
// WasmMatcher
// ============================================================================

/// Abbreviation-aware string matcher for WebAssembly.
#[wasm_bindgen]
pub struct WasmMatcher {
    matcher: Matcher,
}

#[wasm_bindgen]
impl WasmMatcher {
    /// Create a matcher over the built-in street-name corpus.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmMatcher {
        WasmMatcher {
            matcher: Matcher::with_default_corpus(),
        }
    }

    /// Create a matcher from a JavaScript array of string arrays, one array
    /// per equivalence class.
    #[wasm_bindgen(js_name = "fromClasses")]
    pub fn from_classes(classes: JsValue) -> Result<WasmMatcher, JsError> {
        let lists: Vec<Vec<String>> = serde_wasm_bindgen::from_value(classes)
            .map_err(|e| JsError::new(&e.to_string()))?;
        let classes = parse_classes(lists).map_err(|e| JsError::new(&e))?;
        Ok(WasmMatcher {
            matcher: Matcher::from_classes(&classes),
        })
    }

    /// Whether `a` and `b` are equivalent under abbreviation and expansion.
    pub fn compare(&self, a: &str, b: &str) -> bool {
        self.matcher.compare(a, b).is_match()
    }

    /// Compare and return the full diagnostic trace.
    ///
    /// Returns an object with fields `verdict`, `termination`, `foundBy`,
    /// `expansions`, `conclusive`, `forwardRules`, `backwardRules` and
    /// `pops` (each with `direction`, `confirmed`, `remainder`, `remaining`).
    pub fn trace(&self, a: &str, b: &str) -> Result<JsValue, JsError> {
        let mut recorder = TraceRecorder::new();
        let outcome = self.matcher.compare_traced(a, b, &mut recorder);
        let trace = build_trace(&outcome, recorder.events());
        serde_wasm_bindgen::to_value(&trace).map_err(|e| JsError::new(&e.to_string()))
    }

    /// The rules that can fire on `text`, as an object mapping each trigger
    /// to its replacements.
    pub fn rules(&self, text: &str) -> Result<JsValue, JsError> {
        let filtered = FilteredRuleTable::filter(self.matcher.table(), text);
        let obj = js_sys::Object::new();
        for rule in &filtered {
            let arr = js_sys::Array::new();
            for replacement in &rule.replacements {
                arr.push(&JsValue::from_str(replacement));
            }
            js_sys::Reflect::set(&obj, &JsValue::from_str(&rule.trigger), &arr)
                .map_err(|e| JsError::new(&format!("{e:?}")))?;
        }
        Ok(obj.into())
    }

    // -- Option setters -------------------------------------------------------

    /// Enable or disable prefix pruning. The verdict does not change.
    #[wasm_bindgen(js_name = "setPrune")]
    pub fn set_prune(&mut self, value: bool) {
        self.update_options(|o| o.prune = value);
    }

    /// Enable or disable the spaced sibling states.
    #[wasm_bindgen(js_name = "setSpaceInsertion")]
    pub fn set_space_insertion(&mut self, value: bool) {
        self.update_options(|o| o.space_insertion = value);
    }

    /// Enable or disable the "st" -> "st." sibling states.
    #[wasm_bindgen(js_name = "setAbbreviationPeriod")]
    pub fn set_abbreviation_period(&mut self, value: bool) {
        self.update_options(|o| o.abbreviation_period = value);
    }

    /// Cap the number of expansions per comparison; 0 removes the cap.
    #[wasm_bindgen(js_name = "setMaxExpansions")]
    pub fn set_max_expansions(&mut self, value: usize) {
        self.update_options(|o| o.max_expansions = (value > 0).then_some(value));
    }
}

impl WasmMatcher {
    fn update_options(&mut self, f: impl FnOnce(&mut SearchOptions)) {
        let mut options = self.matcher.options();
        f(&mut options);
        self.matcher = self.matcher.clone().with_options(options);
    }
}

impl Default for WasmMatcher {
    fn default() -> Self {
        Self::new()
    }
}
