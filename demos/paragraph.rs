use gridtext_layout::colours;
use gridtext_layout::layout::{
    text_to_nodes, BreakConfig, BreakMode, LayoutBox, LayoutNode, Margin, ParBox, RectBox,
};
use gridtext_layout::{In, PdfRenderer, Pt, Style};

fn main() {
    let page_size: (Pt, Pt) = (In(8.5).into(), In(11.0).into());
    let margins = Margin::all(In(0.75));
    let column = Pt(220.0);
    let gutter = Pt(24.0);

    let mut renderer = PdfRenderer::new();
    // a single paragraph: greedy wrapping ignores penalties, so it would run
    // separate paragraphs together
    let text = lipsum::lipsum(200);
    let body = Style::new()
        .with("font-size", 9.0)
        .with("color", colours::BLACK);

    let columns = [
        ("greedy", BreakMode::Greedy),
        (
            "optimal",
            BreakMode::Optimal(BreakConfig {
                tolerance: 4.0,
                ..Default::default()
            }),
        ),
    ];

    let top = page_size.1 - margins.top;
    for (i, (title, mode)) in columns.into_iter().enumerate() {
        let left = margins.left + (column + gutter) * i as f32;

        let heading = Style::new().with("font-size", 14.0).with("color", "#336699");
        let mut heading = ParBox::new(text_to_nodes(title, &heading, &renderer), Pt(16.0), Pt::ZERO);
        heading.calc_layout(column, Pt::ZERO);
        let baseline = top - heading.ascent();
        heading.place(left, baseline);
        heading.render(&mut renderer, Pt::ZERO, Pt::ZERO);

        let rule = RectBox::new(column, Pt(1.5))
            .with_style(Style::new().with("fill", colours::BLUE))
            .with_radius(Pt(0.75));
        let mut rule = ParBox::new(vec![LayoutNode::boxed(rule)], Pt::ZERO, Pt::ZERO);
        rule.calc_layout(column, Pt::ZERO);
        let baseline = baseline - heading.descent() - Pt(6.0);
        rule.place(left, baseline);
        rule.render(&mut renderer, Pt::ZERO, Pt::ZERO);

        // words are already separated by glue, so no extra hspacing
        let mut par = ParBox::new(text_to_nodes(&text, &body, &renderer), Pt(11.0), Pt::ZERO)
            .with_break_mode(mode);
        par.calc_layout(column, Pt::ZERO);
        par.place(left, baseline - Pt(8.0) - par.ascent());
        par.render(&mut renderer, Pt::ZERO, Pt::ZERO);
        println!("{title}: {} lines", par.lines());
    }

    let out = std::fs::File::create("paragraph.pdf").expect("can create paragraph.pdf");
    renderer
        .write(page_size, std::io::BufWriter::new(out))
        .expect("can write PDF");
}
