use serde::Serialize;
use serde_json::json;
use tinytemplate::TinyTemplate;

use crate::chart::Chart;
use crate::error::Result;

pub(crate) struct TemplateEngine {
    template: TinyTemplate<'static>,
}

impl TemplateEngine {
    const INDEX: &str = "index";

    pub fn new() -> Result<TemplateEngine> {
        let mut template = TinyTemplate::new();
        template.add_template(Self::INDEX, include_str!("./template/index.html.tt"))?;

        Ok(Self { template })
    }

    pub fn render(&self, context: &PageContext<'_>) -> Result<String> {
        let text = self.template.render(Self::INDEX, context)?;
        Ok(text)
    }
}

#[derive(Serialize)]
pub(crate) struct PageContext<'a> {
    title: &'a str,
    charts: Vec<ChartContext<'a>>,
}

impl<'a> PageContext<'a> {
    pub fn new(title: &'a str, charts: &'a [Chart]) -> Result<PageContext<'a>> {
        let charts = charts
            .iter()
            .map(ChartContext::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { title, charts })
    }
}

#[derive(Serialize)]
struct ChartContext<'a> {
    mount: &'a str,
    mount_json: String,
    traces: String,
    layout: String,
    config: String,
}

impl<'a> ChartContext<'a> {
    fn new(chart: &'a Chart) -> Result<ChartContext<'a>> {
        Ok(Self {
            mount: chart.mount(),
            mount_json: script_json(chart.mount())?,
            traces: script_json(chart.traces())?,
            layout: script_json(chart.layout())?,
            config: script_json(&json!({ "responsive": true, "displaylogo": false }))?,
        })
    }
}

// The JSON is inlined into a <script> element, which a literal `</` would close.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}
