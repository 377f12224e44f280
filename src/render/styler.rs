//! Presentation styling for assistant HTML fragments.
//!
//! The backend answers assistant queries with a small HTML subset. Before the
//! fragment is injected into the page, every recognised opening tag is
//! rewritten to carry a fixed set of utility classes.
//!
//! Rules live in one ordered table and are applied one after another, each
//! globally, to the output of the previous rule. Order matters: the colour
//! `div` rules must run before the generic `<div>` rule.
//!
//! Matching is exact: a rule only matches the bare opening tag (`<p>`), never a
//! tag that already carries attributes (`<p class="...">`). Restyling an
//! already-styled fragment is therefore a no-op.
//!
//! This is a styling transform for trusted backend output. It escapes nothing
//! and must not be used on untrusted markup.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// How a rule finds the text it rewrites.
#[derive(Debug)]
pub enum Matcher {
    /// Exact literal occurrence, e.g. `<h1>`.
    Literal(&'static str),
    /// Pattern for tags with spelling variants (colour divs).
    Pattern(Regex),
}

#[derive(Debug)]
pub struct RewriteRule {
    /// Short identifier used in logs and tests (`"h1"`, `"div.red"`).
    pub name: &'static str,
    pub matcher: Matcher,
    pub replacement: &'static str,
}

impl RewriteRule {
    fn literal(name: &'static str, tag: &'static str, replacement: &'static str) -> Self {
        Self {
            name,
            matcher: Matcher::Literal(tag),
            replacement,
        }
    }

    fn apply<'a>(&self, input: Cow<'a, str>) -> Cow<'a, str> {
        match &self.matcher {
            Matcher::Literal(tag) => {
                if input.contains(tag) {
                    Cow::Owned(input.replace(tag, self.replacement))
                } else {
                    input
                }
            }
            Matcher::Pattern(re) => {
                if re.is_match(&input) {
                    Cow::Owned(re.replace_all(&input, NoExpand(self.replacement)).into_owned())
                } else {
                    input
                }
            }
        }
    }
}

const COLOURS: [(&str, &str, &str); 8] = [
    ("red", "div.red", r#"<div class="bg-red-900/20 border border-red-500/50 p-4 rounded-lg mb-4 text-red-300">"#),
    ("green", "div.green", r#"<div class="bg-green-900/20 border border-green-500/50 p-4 rounded-lg mb-4 text-green-300">"#),
    ("orange", "div.orange", r#"<div class="bg-orange-900/20 border border-orange-500/50 p-4 rounded-lg mb-4 text-orange-300">"#),
    ("blue", "div.blue", r#"<div class="bg-blue-900/20 border border-blue-500/50 p-4 rounded-lg mb-4 text-blue-300">"#),
    ("yellow", "div.yellow", r#"<div class="bg-yellow-900/20 border border-yellow-500/50 p-4 rounded-lg mb-4 text-yellow-300">"#),
    ("purple", "div.purple", r#"<div class="bg-purple-900/20 border border-purple-500/50 p-4 rounded-lg mb-4 text-purple-300">"#),
    ("cyan", "div.cyan", r#"<div class="bg-cyan-900/20 border border-cyan-500/50 p-4 rounded-lg mb-4 text-cyan-300">"#),
    ("pink", "div.pink", r#"<div class="bg-pink-900/20 border border-pink-500/50 p-4 rounded-lg mb-4 text-pink-300">"#),
];

static RULES: Lazy<Vec<RewriteRule>> = Lazy::new(build_rules);

fn build_rules() -> Vec<RewriteRule> {
    let mut rules = vec![
        // Headings
        RewriteRule::literal("h1", "<h1>", r#"<h1 class="text-2xl font-bold text-white mb-4 mt-6 first:mt-0">"#),
        RewriteRule::literal("h2", "<h2>", r#"<h2 class="text-xl font-bold text-white mb-3 mt-5 first:mt-0">"#),
        RewriteRule::literal("h3", "<h3>", r#"<h3 class="text-lg font-bold text-cyan-400 mb-2 mt-4 first:mt-0">"#),
        RewriteRule::literal("h4", "<h4>", r#"<h4 class="text-base font-semibold text-purple-400 mb-2 mt-3 first:mt-0">"#),
        RewriteRule::literal("h5", "<h5>", r#"<h5 class="text-sm font-semibold text-cyan-300 mb-2 mt-2 first:mt-0">"#),
        RewriteRule::literal("h6", "<h6>", r#"<h6 class="text-xs font-semibold text-purple-300 mb-2 mt-2 first:mt-0">"#),
        // Text
        RewriteRule::literal("p", "<p>", r#"<p class="mb-3 text-slate-300 leading-relaxed">"#),
        RewriteRule::literal("strong", "<strong>", r#"<strong class="font-bold text-white">"#),
        RewriteRule::literal("b", "<b>", r#"<b class="font-bold text-white">"#),
        RewriteRule::literal("em", "<em>", r#"<em class="italic text-cyan-300">"#),
        RewriteRule::literal("i", "<i>", r#"<i class="italic text-cyan-300">"#),
        RewriteRule::literal("code", "<code>", r#"<code class="bg-slate-800 px-2 py-1 rounded text-cyan-300 font-mono text-sm">"#),
        // Lists
        RewriteRule::literal("ul", "<ul>", r#"<ul class="list-disc list-inside mb-4 space-y-1 text-slate-300 ml-4">"#),
        RewriteRule::literal("ol", "<ol>", r#"<ol class="list-decimal list-inside mb-4 space-y-1 text-slate-300 ml-4">"#),
        RewriteRule::literal("li", "<li>", r#"<li class="text-slate-300 mb-1">"#),
        // Tables
        RewriteRule::literal("table", "<table>", r#"<table class="w-full border-collapse border border-slate-600 mb-4">"#),
        RewriteRule::literal("th", "<th>", r#"<th class="border border-slate-600 px-3 py-2 text-left bg-slate-800 text-white font-semibold">"#),
        RewriteRule::literal("td", "<td>", r#"<td class="border border-slate-600 px-3 py-2 text-slate-300">"#),
        RewriteRule::literal("blockquote", "<blockquote>", r#"<blockquote class="border-l-4 border-cyan-500 pl-4 py-2 mb-4 bg-slate-800/50 italic text-slate-300">"#),
        RewriteRule::literal("hr", "<hr>", r#"<hr class="border-slate-600 my-6">"#),
    ];

    // Colour callouts: `<div style="color: red;">` and `<div style="color: red-500;">`.
    // Must precede the generic div rule.
    for (colour, name, replacement) in COLOURS {
        let pattern = format!(r#"<div style="color: {colour}(?:-500)?;">"#);
        rules.push(RewriteRule {
            name,
            matcher: Matcher::Pattern(Regex::new(&pattern).expect("static colour pattern")),
            replacement,
        });
    }

    rules.extend([
        RewriteRule::literal("div", "<div>", r#"<div class="mb-3">"#),
        RewriteRule::literal("a", "<a href=", r#"<a class="text-cyan-400 hover:text-cyan-300 underline" href="#),
        RewriteRule::literal("pre", "<pre>", r#"<pre class="bg-slate-800 p-4 rounded-lg mb-4 overflow-x-auto">"#),
    ]);

    rules
}

/// The rewrite table, in application order.
pub fn rules() -> &'static [RewriteRule] {
    &RULES
}

/// Replacement text for the rule named `name`, if any.
pub fn replacement_for(name: &str) -> Option<&'static str> {
    RULES.iter().find(|r| r.name == name).map(|r| r.replacement)
}

/// Restyle a backend HTML fragment. Unrecognised markup passes through untouched.
pub fn style_fragment(html: &str) -> String {
    RULES
        .iter()
        .fold(Cow::Borrowed(html), |acc, rule| rule.apply(acc))
        .into_owned()
}
