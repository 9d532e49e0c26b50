//! HTML reporter: generates a self-contained interactive HTML dashboard
//!
//! Embeds the assessment as JSON and renders everything client-side
//! with vanilla JS for filtering, sorting and searching the file list.

use crate::analyzer::ScoreCalculator;
use crate::i18n::{Locale, Messages, Text};
use crate::{Assessment, FileResult, Issue, Severity};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Keeps `</script>` out of the embedded block; serde_json handles quoting
fn escape_json_for_script(s: &str) -> String {
    s.replace("</script>", "<\\/script>")
}

/// BCP 47 tag for the `lang` attribute
fn html_lang(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "en",
        Locale::Ru => "ru",
        Locale::Ua => "uk",
    }
}

/// Reporter that generates a self-contained HTML dashboard
pub struct HtmlReporter {
    messages: Messages,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsReport {
    overall_score: u8,
    level: String,
    level_description: &'static str,
    categories: Vec<JsCategory>,
    files: Vec<JsFile>,
    recommendations: Vec<JsRecommendation>,
    analysis: JsAnalysis,
    summary: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCategory {
    key: &'static str,
    name: &'static str,
    score: u32,
    max_score: u32,
    percentage: u8,
    issues_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsIssue {
    rule: String,
    severity: Severity,
    severity_label: &'static str,
    message: String,
    line: Option<usize>,
    column: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsFile {
    path: String,
    score: u8,
    issues: Vec<JsIssue>,
    suggestions: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsRecommendation {
    title: String,
    description: String,
    priority: &'static str,
    high: bool,
    examples: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsAnalysis {
    practice_score: u8,
    complexity_score: u8,
    strengths: Vec<String>,
    weaknesses: Vec<String>,
    next_steps: Vec<String>,
    time_to_next_level: &'static str,
}

/// Localized strings the script needs
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsLabels {
    title: &'static str,
    overall_score: &'static str,
    developer_level: &'static str,
    categories: &'static str,
    recommendations: &'static str,
    files: &'static str,
    issues: &'static str,
    score: &'static str,
    suggestions: &'static str,
    no_issues: &'static str,
    strengths: &'static str,
    weaknesses: &'static str,
    next_steps: &'static str,
    time_to_next_level: &'static str,
    practice_score: &'static str,
    complexity_score: &'static str,
    summary: &'static str,
}

impl HtmlReporter {
    pub fn new(messages: Messages) -> Self {
        Self { messages }
    }

    /// Generate the full HTML report
    pub fn report(&self, assessment: &Assessment) -> String {
        let data_json =
            serde_json::to_string(&self.to_js_report(assessment)).unwrap_or_else(|_| "{}".to_string());
        let labels_json =
            serde_json::to_string(&self.labels()).unwrap_or_else(|_| "{}".to_string());

        let mut html = String::with_capacity(32_768);
        html.push_str("<!DOCTYPE html>\n<html lang=\"");
        html.push_str(html_lang(self.messages.locale()));
        html.push_str("\">\n<head>\n<meta charset=\"UTF-8\">\n<title>");
        html.push_str(self.messages.text(Text::ReportTitle));
        html.push_str("</title>\n");
        html.push_str(Self::template_head());
        html.push_str("<script>const DATA=");
        html.push_str(&escape_json_for_script(&data_json));
        html.push_str(";const LABELS=");
        html.push_str(&escape_json_for_script(&labels_json));
        html.push_str(";</script>\n");
        html.push_str(Self::template_body());
        html.push_str(Self::template_script());
        html.push_str("</body>\n</html>");
        html
    }

    /// Write the report to `path`
    pub fn write(&self, assessment: &Assessment, path: &Path) -> Result<()> {
        fs::write(path, self.report(assessment))
            .with_context(|| format!("Failed to write HTML report: {}", path.display()))
    }

    fn to_js_report(&self, assessment: &Assessment) -> JsReport {
        let m = &self.messages;
        let analysis = &assessment.level_analysis;
        JsReport {
            overall_score: assessment.overall_score,
            level: m.level_name(assessment.level).to_string(),
            level_description: m.level_description(assessment.level),
            categories: assessment
                .categories
                .iter()
                .map(|(category, result)| JsCategory {
                    key: category.key(),
                    name: m.category(category),
                    score: result.score,
                    max_score: result.max_score,
                    percentage: result.percentage,
                    issues_count: result.issues.len(),
                })
                .collect(),
            files: assessment.file_results.iter().map(|f| self.to_js_file(f)).collect(),
            recommendations: assessment
                .recommendations
                .iter()
                .map(|r| JsRecommendation {
                    title: r.title.clone(),
                    description: r.description.clone(),
                    priority: m.priority(r.priority),
                    high: r.priority == crate::Priority::High,
                    examples: r.examples.clone(),
                })
                .collect(),
            analysis: JsAnalysis {
                practice_score: analysis.practice_score,
                complexity_score: analysis.complexity_score,
                strengths: analysis.strengths.iter().map(|f| m.finding(*f, true)).collect(),
                weaknesses: analysis.weaknesses.iter().map(|f| m.finding(*f, false)).collect(),
                next_steps: analysis.next_steps.clone(),
                time_to_next_level: m.time_band(analysis.time_to_next_level),
            },
            summary: ScoreCalculator::summary(
                assessment.overall_score,
                assessment.level,
                &assessment.categories,
                m,
            ),
        }
    }

    fn to_js_file(&self, file: &FileResult) -> JsFile {
        JsFile {
            path: file.path.clone(),
            score: file.score,
            issues: file.issues.iter().map(|i| self.to_js_issue(i)).collect(),
            suggestions: file.suggestions.clone(),
        }
    }

    fn to_js_issue(&self, issue: &Issue) -> JsIssue {
        JsIssue {
            rule: issue.rule.clone(),
            severity: issue.severity,
            severity_label: self.messages.severity(issue.severity),
            message: issue.message.clone(),
            line: issue.line,
            column: issue.column,
        }
    }

    fn labels(&self) -> JsLabels {
        let m = &self.messages;
        JsLabels {
            title: m.text(Text::ReportTitle),
            overall_score: m.text(Text::OverallScore),
            developer_level: m.text(Text::DeveloperLevel),
            categories: m.text(Text::CategoriesBreakdown),
            recommendations: m.text(Text::Recommendations),
            files: m.text(Text::FileAnalysis),
            issues: m.text(Text::Issues),
            score: m.text(Text::Score),
            suggestions: m.text(Text::Suggestions),
            no_issues: m.text(Text::NoIssuesFound),
            strengths: m.text(Text::Strengths),
            weaknesses: m.text(Text::Weaknesses),
            next_steps: m.text(Text::NextSteps),
            time_to_next_level: m.text(Text::TimeToNextLevel),
            practice_score: m.text(Text::PracticeScore),
            complexity_score: m.text(Text::ComplexityScore),
            summary: m.text(Text::Summary),
        }
    }

    // ─── HTML template pieces ────────────────────────────────────────────

    fn template_head() -> &'static str {
        r##"<meta name="viewport" content="width=device-width, initial-scale=1">
<style>
:root{--bg:#0d0d11;--surface:#16161b;--surface2:#1e1e24;--border:#2a2a32;--text:#e4e4e7;--muted:#71717a;--green:#22c55e;--yellow:#eab308;--red:#ef4444;--blue:#3b82f6;--cyan:#06b6d4;--radius:8px}
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:var(--bg);color:var(--text);line-height:1.5;min-height:100vh}

.shell{display:grid;grid-template-columns:1fr 340px;min-height:100vh}
@media(max-width:960px){.shell{grid-template-columns:1fr}}
header{grid-column:1/-1;padding:1.25rem 1.5rem;border-bottom:1px solid var(--border);display:flex;align-items:center;gap:1.5rem;flex-wrap:wrap}
header h1{font-size:1.125rem;font-weight:700}
header .meta{font-size:.8125rem;color:var(--muted)}

.stats-bar{grid-column:1/-1;display:flex;border-bottom:1px solid var(--border);background:var(--surface)}
.stat{flex:1;padding:.875rem 1.25rem;border-right:1px solid var(--border);text-align:center}
.stat:last-child{border-right:none}
.stat .val{font-size:1.5rem;font-weight:700;display:block}
.stat .lbl{font-size:.75rem;color:var(--muted);text-transform:uppercase;letter-spacing:.5px}

.main{grid-column:1;padding:1rem 1.5rem}
.sidebar{grid-column:2;border-left:1px solid var(--border);padding:1rem 1.25rem;background:var(--surface)}
@media(max-width:960px){.sidebar{grid-column:1;border-left:none;border-top:1px solid var(--border)}}

h2{font-size:.875rem;text-transform:uppercase;letter-spacing:.5px;color:var(--muted);margin:1rem 0 .5rem}
.cat{display:grid;grid-template-columns:160px 1fr 48px;gap:.75rem;align-items:center;padding:.35rem 0;font-size:.875rem}
.bar{height:8px;background:var(--border);border-radius:4px}
.bar span{display:block;height:100%;border-radius:4px}

.controls{display:flex;gap:.75rem;flex-wrap:wrap;align-items:center;margin:.5rem 0 1rem}
.search{background:var(--surface);border:1px solid var(--border);border-radius:var(--radius);padding:.5rem .75rem;color:var(--text);font-size:.8125rem;width:240px;outline:none}
.search:focus{border-color:var(--blue)}
.pill-group{display:flex;gap:2px;background:var(--surface);border-radius:var(--radius);padding:2px;border:1px solid var(--border)}
.pill{padding:.3rem .7rem;font-size:.75rem;font-weight:600;border-radius:6px;cursor:pointer;border:none;background:transparent;color:var(--muted)}
.pill.active{background:var(--surface2);color:var(--text)}
select.sort-sel{background:var(--surface);border:1px solid var(--border);border-radius:var(--radius);padding:.45rem .6rem;color:var(--text);font-size:.8125rem}
.count-badge{font-size:.75rem;color:var(--muted);margin-left:auto}

.file{border:1px solid var(--border);border-radius:var(--radius);margin-bottom:.5rem;background:var(--surface)}
.file summary{display:flex;gap:1rem;padding:.6rem .9rem;cursor:pointer;font-size:.875rem;list-style:none}
.file summary .path{flex:1;font-family:ui-monospace,monospace;overflow:hidden;text-overflow:ellipsis}
.file ul{list-style:none;padding:.25rem .9rem .75rem}
.file li{font-size:.8125rem;padding:.2rem 0}
.rule{font-family:ui-monospace,monospace;color:var(--muted);margin-right:.5rem}
.sev-error{color:var(--red)}.sev-warning{color:var(--yellow)}.sev-info{color:var(--blue)}
.suggestion{color:var(--cyan)}

.sb-section{margin-bottom:1.5rem;font-size:.8125rem}
.sb-section h3{font-size:.75rem;text-transform:uppercase;letter-spacing:.5px;color:var(--muted);margin-bottom:.5rem;padding-bottom:.375rem;border-bottom:1px solid var(--border)}
.sb-section li{margin-left:1rem;padding:.15rem 0}
.rec{padding:.5rem 0;border-bottom:1px solid var(--border)}
.rec .prio{font-size:.6875rem;text-transform:uppercase;font-weight:700}
.summary{white-space:pre-wrap;font-size:.8125rem;color:var(--muted)}
.c-green{color:var(--green)}.c-yellow{color:var(--yellow)}.c-red{color:var(--red)}
</style>
</head>
<body>
"##
    }

    fn template_body() -> &'static str {
        r##"<div class="shell">
  <header>
    <h1 id="title"></h1>
    <span class="meta" id="meta"></span>
  </header>
  <div class="stats-bar" id="stats-bar"></div>
  <div class="main">
    <h2 id="cat-title"></h2>
    <div id="categories"></div>
    <h2 id="files-title"></h2>
    <div class="controls">
      <input type="search" class="search" id="search" autocomplete="off">
      <div class="pill-group" id="severity-filter">
        <button class="pill active" data-sev="all">*</button>
        <button class="pill sev-error" data-sev="error">●</button>
        <button class="pill sev-warning" data-sev="warning">●</button>
        <button class="pill sev-info" data-sev="info">●</button>
      </div>
      <select class="sort-sel" id="sort-sel">
        <option value="score-asc">↑</option>
        <option value="score-desc">↓</option>
        <option value="name">A→Z</option>
        <option value="issues">#</option>
      </select>
      <span class="count-badge" id="count-badge"></span>
    </div>
    <div id="files"></div>
  </div>
  <div class="sidebar" id="sidebar"></div>
</div>
"##
    }

    fn template_script() -> &'static str {
        r##"<script>
(function(){
"use strict";

const $=s=>document.querySelector(s);
const $$=s=>[...document.querySelectorAll(s)];
const esc=s=>{const d=document.createElement('div');d.textContent=String(s);return d.innerHTML};
const color=s=>s>=80?'green':s>=60?'yellow':'red';
const list=items=>'<ul>'+items.map(i=>`<li>${esc(i)}</li>`).join('')+'</ul>';

let severity='all';
let sortBy='score-asc';
let query='';

function renderHeader(){
  document.title=LABELS.title;
  $('#title').textContent=LABELS.title;
  $('#meta').textContent=new Date().toLocaleDateString();
  const issues=DATA.files.reduce((n,f)=>n+f.issues.length,0);
  $('#stats-bar').innerHTML=`
    <div class="stat"><span class="val c-${color(DATA.overallScore)}">${DATA.overallScore}/100</span><span class="lbl">${esc(LABELS.overallScore)}</span></div>
    <div class="stat"><span class="val">${esc(DATA.level)}</span><span class="lbl">${esc(LABELS.developerLevel)}</span></div>
    <div class="stat"><span class="val">${DATA.files.length}</span><span class="lbl">${esc(LABELS.files)}</span></div>
    <div class="stat"><span class="val${issues>0?' c-red':''}">${issues}</span><span class="lbl">${esc(LABELS.issues)}</span></div>`;
}

function renderCategories(){
  $('#cat-title').textContent=LABELS.categories;
  $('#categories').innerHTML=DATA.categories.map(c=>`
    <div class="cat"><span>${esc(c.name)}</span>
      <div class="bar"><span style="width:${c.percentage}%;background:var(--${color(c.percentage)})"></span></div>
      <span class="c-${color(c.percentage)}">${c.percentage}%</span></div>`).join('');
}

function visibleFiles(){
  const q=query.toLowerCase();
  let files=DATA.files.filter(f=>
    (!q||f.path.toLowerCase().includes(q))&&
    (severity==='all'||f.issues.some(i=>i.severity===severity)));
  const cmp={
    'score-asc':(a,b)=>a.score-b.score,
    'score-desc':(a,b)=>b.score-a.score,
    'name':(a,b)=>a.path.localeCompare(b.path),
    'issues':(a,b)=>b.issues.length-a.issues.length
  }[sortBy];
  return files.slice().sort(cmp);
}

function renderIssue(i){
  const loc=i.line!=null?` L${i.line}:${i.column??0}`:'';
  return `<li><span class="sev-${i.severity}">●</span> <span class="rule">${esc(i.rule)}${loc}</span>${esc(i.message)}</li>`;
}

function renderFiles(){
  $('#files-title').textContent=LABELS.files;
  const files=visibleFiles();
  $('#count-badge').textContent=`${files.length} / ${DATA.files.length}`;
  $('#files').innerHTML=files.map(f=>`
    <details class="file"><summary>
      <span class="path">${esc(f.path)}</span>
      <span class="c-${color(f.score)}">${esc(LABELS.score)}: ${f.score}</span>
      <span>${esc(LABELS.issues)}: ${f.issues.length}</span></summary>
      <ul>${f.issues.length?f.issues.map(renderIssue).join(''):`<li>${esc(LABELS.noIssues)}</li>`}
      ${f.suggestions.map(s=>`<li class="suggestion">→ ${esc(s)}</li>`).join('')}</ul>
    </details>`).join('');
}

function renderSidebar(){
  const a=DATA.analysis;
  let html=`<div class="sb-section"><h3>${esc(LABELS.developerLevel)}</h3>
    <p><strong>${esc(DATA.level)}</strong></p><p>${esc(DATA.levelDescription)}</p>
    <p>${esc(LABELS.practiceScore)}: ${a.practiceScore} · ${esc(LABELS.complexityScore)}: ${a.complexityScore}</p>
    <p>${esc(LABELS.timeToNextLevel)}: ${esc(a.timeToNextLevel)}</p></div>`;
  if(a.strengths.length) html+=`<div class="sb-section"><h3>${esc(LABELS.strengths)}</h3>${list(a.strengths)}</div>`;
  if(a.weaknesses.length) html+=`<div class="sb-section"><h3>${esc(LABELS.weaknesses)}</h3>${list(a.weaknesses)}</div>`;
  if(a.nextSteps.length) html+=`<div class="sb-section"><h3>${esc(LABELS.nextSteps)}</h3>${list(a.nextSteps)}</div>`;
  if(DATA.recommendations.length){
    html+=`<div class="sb-section"><h3>${esc(LABELS.recommendations)}</h3>`+DATA.recommendations.map(r=>`
      <div class="rec"><span class="prio ${r.high?'c-red':'c-yellow'}">${esc(r.priority)}</span>
      <div><strong>${esc(r.title)}</strong></div><div>${esc(r.description)}</div>${list(r.examples)}</div>`).join('')+'</div>';
  }
  html+=`<div class="sb-section"><h3>${esc(LABELS.summary)}</h3><p class="summary">${esc(DATA.summary)}</p></div>`;
  $('#sidebar').innerHTML=html;
}

$('#search').addEventListener('input',e=>{query=e.target.value;renderFiles()});
$('#sort-sel').addEventListener('change',e=>{sortBy=e.target.value;renderFiles()});
$$('#severity-filter .pill').forEach(b=>b.addEventListener('click',()=>{
  $$('#severity-filter .pill').forEach(p=>p.classList.remove('active'));
  b.classList.add('active');
  severity=b.dataset.sev;
  renderFiles();
}));

renderHeader();
renderCategories();
renderFiles();
renderSidebar();
})();
</script>
"##
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new(Messages::english())
    }
}
