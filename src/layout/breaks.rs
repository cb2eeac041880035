//! Optimal paragraph line breaking.
//!
//! Instead of filling each line greedily, the search considers every feasible
//! break point and picks the partition of the paragraph that minimises the total
//! demerits of all its lines (Knuth and Plass, "Breaking Paragraphs into Lines").
//!
//! Candidate breaks live in an append-only [Arena]; each records the id of the
//! break that precedes it on its cheapest path, so the winning partition is
//! recovered by walking ids back from the final break.

use super::{LayoutNode, NodeType};
use crate::error::LayoutError;
use crate::units::Pt;
use id_arena::{Arena, Id};
use log::{debug, trace, warn};

/// Adjustment ratio reported for a line that would have to stretch or shrink
/// glue that has no elasticity. It is only ever compared against, never used in
/// arithmetic: an under-full line gets `+INFINITE_RATIO` and is rejected as too
/// loose, an over-full line gets `-INFINITE_RATIO` and is rejected as impossibly
/// tight.
pub const INFINITE_RATIO: f64 = 1.0e10;

/// Knobs for the break search
#[derive(Debug, Clone, PartialEq)]
pub struct BreakConfig {
    /// Largest adjustment ratio a line may have and still be considered
    pub tolerance: f64,
    /// Added when adjacent lines differ by more than one fitness class
    pub fitness_demerit: f64,
    /// Added when two consecutive lines both end at flagged penalties
    pub flagged_demerit: f64,
    /// Upper bound on the number of simultaneously active breakpoints
    pub max_active: usize,
}

impl Default for BreakConfig {
    fn default() -> Self {
        BreakConfig {
            tolerance: 1.0,
            fitness_demerit: 100.0,
            flagged_demerit: 100.0,
            max_active: 512,
        }
    }
}

/// How tightly or loosely a line is set
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FitnessClass {
    VeryTight = 0,
    Normal = 1,
    Loose = 2,
    VeryLoose = 3,
}

impl FitnessClass {
    pub fn from_ratio(ratio: f64) -> FitnessClass {
        if ratio < -0.5 {
            FitnessClass::VeryTight
        } else if ratio <= 0.5 {
            FitnessClass::Normal
        } else if ratio <= 1.0 {
            FitnessClass::Loose
        } else {
            FitnessClass::VeryLoose
        }
    }

    fn distance(self, other: FitnessClass) -> u32 {
        (self as i32 - other as i32).unsigned_abs()
    }
}

/// One line of a broken paragraph
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineBreak {
    /// Index of the node the line breaks at. The node itself is consumed by the
    /// break, unless it is the final box of the paragraph.
    pub position: usize,
    /// Adjustment ratio the line's glue must be set with
    pub ratio: f64,
    pub fitness: FitnessClass,
}

/// The measurements of a node the break search cares about
#[derive(Debug, Copy, Clone)]
struct Item {
    kind: NodeType,
    width: Pt,
    stretch: Pt,
    shrink: Pt,
    penalty: f64,
    flagged: bool,
}

impl From<&LayoutNode> for Item {
    fn from(node: &LayoutNode) -> Self {
        let mut item = Item {
            kind: node.node_type(),
            width: node.width(),
            stretch: Pt::ZERO,
            shrink: Pt::ZERO,
            penalty: 0.0,
            flagged: false,
        };
        match node {
            LayoutNode::Glue(g) => {
                item.stretch = g.stretch();
                item.shrink = g.shrink();
            }
            LayoutNode::Penalty(p) => {
                item.penalty = p.penalty();
                item.flagged = p.flagged();
            }
            LayoutNode::Box(_) => {}
        }
        item
    }
}

impl Item {
    fn is_forced(&self) -> bool {
        self.kind == NodeType::Penalty && self.penalty <= -super::Penalty::INFINITY
    }
}

/// Running totals of width, stretch, and shrink; entry `i` covers nodes `0..i`.
/// Kept in `f64` so that fill glue early in a long paragraph does not swallow
/// the stretch of ordinary spaces after it.
struct PrefixSums {
    width: Vec<f64>,
    stretch: Vec<f64>,
    shrink: Vec<f64>,
}

impl PrefixSums {
    fn new(items: &[Item]) -> PrefixSums {
        let mut sums = PrefixSums {
            width: Vec::with_capacity(items.len() + 1),
            stretch: Vec::with_capacity(items.len() + 1),
            shrink: Vec::with_capacity(items.len() + 1),
        };
        let (mut w, mut y, mut z) = (0.0, 0.0, 0.0);
        sums.push(w, y, z);
        for item in items {
            match item.kind {
                NodeType::Box => w += item.width.0 as f64,
                NodeType::Glue => {
                    w += item.width.0 as f64;
                    y += item.stretch.0 as f64;
                    z += item.shrink.0 as f64;
                }
                // a penalty only has width on the line it ends
                NodeType::Penalty => {}
            }
            sums.push(w, y, z);
        }
        sums
    }

    fn push(&mut self, w: f64, y: f64, z: f64) {
        self.width.push(w);
        self.stretch.push(y);
        self.shrink.push(z);
    }
}

#[derive(Debug, Clone)]
struct Breakpoint {
    position: usize,
    /// number of lines set once this break is taken
    line: usize,
    fitness: FitnessClass,
    /// totals of everything before the line that starts after this break
    total_width: f64,
    total_stretch: f64,
    total_shrink: f64,
    demerits: f64,
    ratio: f64,
    previous: Option<Id<Breakpoint>>,
}

impl Breakpoint {
    fn start() -> Breakpoint {
        Breakpoint {
            position: 0,
            line: 0,
            fitness: FitnessClass::Normal,
            total_width: 0.0,
            total_stretch: 0.0,
            total_shrink: 0.0,
            demerits: 0.0,
            ratio: 0.0,
            previous: None,
        }
    }
}

/// Active breakpoints, ordered by line number. Holds at most one entry per
/// (line, fitness class, position).
#[derive(Debug, Default)]
struct ActiveList {
    entries: Vec<Id<Breakpoint>>,
}

impl ActiveList {
    /// Add `candidate` after every entry with the same or a smaller line number.
    /// A candidate matching an existing entry's line, fitness class, and position
    /// is dropped and `None` returned.
    fn insert(
        &mut self,
        arena: &mut Arena<Breakpoint>,
        candidate: Breakpoint,
    ) -> Option<Id<Breakpoint>> {
        let mut at = self.entries.len();
        for (i, id) in self.entries.iter().enumerate() {
            let existing = &arena[*id];
            if existing.line > candidate.line {
                at = i;
                break;
            }
            if existing.line == candidate.line
                && existing.fitness == candidate.fitness
                && existing.position == candidate.position
            {
                return None;
            }
        }
        let id = arena.alloc(candidate);
        self.entries.insert(at, id);
        Some(id)
    }

    /// Keep only the `limit` entries with the fewest demerits, preserving order
    fn truncate_to_best(&mut self, arena: &Arena<Breakpoint>, limit: usize) {
        if self.entries.len() <= limit {
            return;
        }
        let mut ranked: Vec<usize> = (0..self.entries.len()).collect();
        ranked.sort_by(|&a, &b| {
            arena[self.entries[a]]
                .demerits
                .total_cmp(&arena[self.entries[b]].demerits)
        });
        let mut keep = vec![false; self.entries.len()];
        for &i in ranked.iter().take(limit) {
            keep[i] = true;
        }
        let mut i = 0;
        self.entries.retain(|_| {
            let kept = keep[i];
            i += 1;
            kept
        });
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The adjustment ratio of a line with natural `width` and total glue
/// elasticity `stretch` / `shrink`, set into `available` space.
///
/// Positive ratios stretch, negative ratios shrink. A line that needs
/// elasticity it does not have gets `±`[INFINITE_RATIO].
pub fn adjustment_ratio(width: Pt, stretch: Pt, shrink: Pt, available: Pt) -> f64 {
    ratio_of(
        width.0 as f64,
        stretch.0 as f64,
        shrink.0 as f64,
        available.0 as f64,
    )
}

fn ratio_of(width: f64, stretch: f64, shrink: f64, available: f64) -> f64 {
    if width < available {
        if stretch > 0.0 {
            (available - width) / stretch
        } else {
            INFINITE_RATIO
        }
    } else if width > available {
        if shrink > 0.0 {
            (available - width) / shrink
        } else {
            -INFINITE_RATIO
        }
    } else {
        0.0
    }
}

/// Demerits of a single line set with `ratio` and ending at a break of cost `penalty`
fn line_demerits(ratio: f64, penalty: f64, forced: bool) -> f64 {
    let badness = 100.0 * ratio.abs().powi(3);
    if penalty >= 0.0 {
        (1.0 + badness + penalty).powi(3)
    } else if forced {
        (1.0 + badness).powi(2) - penalty.powi(2)
    } else {
        (1.0 + badness).powi(2)
    }
}

/// A break is allowed at a penalty that isn't infinite, or at glue directly
/// following a box
fn is_feasible_breakpoint(items: &[Item], i: usize) -> bool {
    match items[i].kind {
        NodeType::Penalty => items[i].penalty < super::Penalty::INFINITY,
        NodeType::Glue => i > 0 && items[i - 1].kind == NodeType::Box,
        NodeType::Box => false,
    }
}

/// Exclusive end of the material set on a line that breaks at `position`. The
/// break node is consumed, except for a box closing the paragraph.
pub(crate) fn content_end(kind: NodeType, position: usize, node_count: usize) -> usize {
    if kind == NodeType::Box && position + 1 == node_count {
        node_count
    } else {
        position
    }
}

struct Search<'a> {
    items: &'a [Item],
    sums: &'a PrefixSums,
    line_lengths: &'a [Pt],
    config: &'a BreakConfig,
}

impl Search<'_> {
    fn available(&self, line: usize) -> Pt {
        match self.line_lengths.get(line) {
            Some(len) => *len,
            None => self.line_lengths[self.line_lengths.len() - 1],
        }
    }

    /// Adjustment ratio of the line from `from` up to a break at `to`. Lines
    /// ending in a forced break are set ragged, so they never need to stretch.
    fn ratio(&self, from: &Breakpoint, to: usize, forced: bool) -> f64 {
        let item = &self.items[to];
        let end = content_end(item.kind, to, self.items.len());
        let mut width = self.sums.width[end] - from.total_width;
        if item.kind == NodeType::Penalty {
            width += item.width.0 as f64;
        }
        let stretch = self.sums.stretch[end] - from.total_stretch;
        let shrink = self.sums.shrink[end] - from.total_shrink;

        let ratio = ratio_of(width, stretch, shrink, self.available(from.line).0 as f64);
        if forced && ratio > 0.0 {
            0.0
        } else {
            ratio
        }
    }

    /// The breakpoint created by ending a line that starts after `from` at `to`,
    /// or `None` if that line is infeasible
    fn candidate(
        &self,
        from_id: Id<Breakpoint>,
        from: &Breakpoint,
        to: usize,
        ratio: f64,
    ) -> Option<Breakpoint> {
        if ratio < -1.0 || ratio > self.config.tolerance || ratio >= INFINITE_RATIO {
            return None;
        }
        let item = &self.items[to];

        let mut demerits = line_demerits(ratio, item.penalty, item.is_forced());
        if item.flagged && from.previous.is_some() && self.items[from.position].flagged {
            demerits += self.config.flagged_demerit;
        }
        let fitness = FitnessClass::from_ratio(ratio);
        if fitness.distance(from.fitness) > 1 {
            demerits += self.config.fitness_demerit;
        }

        Some(Breakpoint {
            position: to,
            line: from.line + 1,
            fitness,
            total_width: self.sums.width[to + 1],
            total_stretch: self.sums.stretch[to + 1],
            total_shrink: self.sums.shrink[to + 1],
            demerits: from.demerits + demerits,
            ratio,
            previous: Some(from_id),
        })
    }
}

/// Find the optimal lines for `nodes`, where line `n` is `line_lengths[n]` wide
/// (the last entry applies to every further line).
///
/// The last node always ends the paragraph. An empty node list has no lines.
/// Fails with [LayoutError::NoFeasibleBreak] when no partition stays within
/// `config.tolerance`.
pub fn find_lines(
    nodes: &[LayoutNode],
    line_lengths: &[Pt],
    config: &BreakConfig,
) -> Result<Vec<LineBreak>, LayoutError> {
    let node_count = nodes.len();
    if node_count == 0 {
        return Ok(Vec::new());
    }
    if line_lengths.is_empty() {
        return Err(LayoutError::MissingLineLengths);
    }
    if config.tolerance.is_nan() || config.tolerance < 0.0 {
        return Err(LayoutError::InvalidTolerance(config.tolerance));
    }

    let items: Vec<Item> = nodes.iter().map(Item::from).collect();
    let sums = PrefixSums::new(&items);
    let search = Search {
        items: &items,
        sums: &sums,
        line_lengths,
        config,
    };
    let max_active = config.max_active.max(1);

    let mut arena: Arena<Breakpoint> = Arena::new();
    let mut active = ActiveList::default();
    active.insert(&mut arena, Breakpoint::start());
    let mut peak_active = 1;
    let mut capped = false;

    for i in 0..node_count {
        let last = i + 1 == node_count;
        // position 0 belongs to the starting breakpoint unless it is also the end
        if i == 0 && !last {
            continue;
        }
        let forced = last || items[i].is_forced();
        if !forced && !is_feasible_breakpoint(&items, i) {
            continue;
        }

        let mut candidates = Vec::new();
        let mut still_active = Vec::with_capacity(active.len());
        for &id in active.entries.iter() {
            let from = &arena[id];
            let ratio = search.ratio(from, i, forced);
            if let Some(candidate) = search.candidate(id, from, i, ratio) {
                trace!(
                    "candidate break {} -> {}: ratio {:.3}, demerits {:.1}",
                    from.position,
                    i,
                    ratio,
                    candidate.demerits
                );
                candidates.push(candidate);
            }
            if ratio >= -1.0 && !forced {
                still_active.push(id);
            }
        }
        active.entries = still_active;

        for candidate in candidates {
            active.insert(&mut arena, candidate);
        }

        if active.len() > max_active {
            if !capped {
                warn!(
                    "active breakpoints exceeded {} at node {}; keeping the cheapest",
                    max_active, i
                );
                capped = true;
            }
            active.truncate_to_best(&arena, max_active);
        }
        peak_active = peak_active.max(active.len());

        if active.is_empty() {
            debug!(
                "line breaking failed at node {} of {} (tolerance {})",
                i, node_count, config.tolerance
            );
            return Err(LayoutError::NoFeasibleBreak {
                position: i,
                tolerance: config.tolerance,
            });
        }
    }

    // the final node is a forced break, so every survivor ends the paragraph
    let mut best = active.entries[0];
    for &id in active.entries.iter().skip(1) {
        if arena[id].demerits < arena[best].demerits {
            best = id;
        }
    }

    let mut lines = Vec::new();
    let mut cursor = Some(best);
    while let Some(id) = cursor {
        let bp = &arena[id];
        if bp.previous.is_some() {
            lines.push(LineBreak {
                position: bp.position,
                ratio: bp.ratio,
                fitness: bp.fitness,
            });
        }
        cursor = bp.previous;
    }
    lines.reverse();

    debug!(
        "broke {} nodes into {} lines ({:.1} demerits, {} breakpoints, peak {} active)",
        node_count,
        lines.len(),
        arena[best].demerits,
        arena.len(),
        peak_active
    );

    Ok(lines)
}

/// Positions of the optimal breaks for `nodes`; see [find_lines]
pub fn compute_breaks(
    nodes: &[LayoutNode],
    line_lengths: &[Pt],
    config: &BreakConfig,
) -> Result<Vec<usize>, LayoutError> {
    Ok(find_lines(nodes, line_lengths, config)?
        .into_iter()
        .map(|line| line.position)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Glue, NodeList, Penalty, RectBox};

    fn word(width: f32) -> LayoutNode {
        LayoutNode::boxed(RectBox::new(Pt(width), Pt(8.0)))
    }

    fn space() -> LayoutNode {
        LayoutNode::glue(Pt(5.0), Pt(3.0), Pt(2.0))
    }

    /// words of the given widths separated by elastic spaces
    fn words(widths: &[f32]) -> NodeList {
        let mut nodes = Vec::new();
        for (i, w) in widths.iter().enumerate() {
            if i > 0 {
                nodes.push(space());
            }
            nodes.push(word(*w));
        }
        nodes
    }

    #[test]
    fn adjustment_ratio_stretches_and_shrinks() {
        let r = adjustment_ratio(Pt(90.0), Pt(20.0), Pt(0.0), Pt(100.0));
        assert_eq!(r, 0.5);
        assert_eq!(FitnessClass::from_ratio(r), FitnessClass::Normal);

        assert_eq!(adjustment_ratio(Pt(110.0), Pt(0.0), Pt(20.0), Pt(100.0)), -0.5);
        assert_eq!(adjustment_ratio(Pt(100.0), Pt(0.0), Pt(0.0), Pt(100.0)), 0.0);
        assert_eq!(
            adjustment_ratio(Pt(90.0), Pt(0.0), Pt(10.0), Pt(100.0)),
            INFINITE_RATIO
        );
        assert_eq!(
            adjustment_ratio(Pt(110.0), Pt(10.0), Pt(0.0), Pt(100.0)),
            -INFINITE_RATIO
        );
    }

    #[test]
    fn fitness_class_boundaries() {
        assert_eq!(FitnessClass::from_ratio(-0.6), FitnessClass::VeryTight);
        assert_eq!(FitnessClass::from_ratio(-0.5), FitnessClass::Normal);
        assert_eq!(FitnessClass::from_ratio(0.5), FitnessClass::Normal);
        assert_eq!(FitnessClass::from_ratio(0.75), FitnessClass::Loose);
        assert_eq!(FitnessClass::from_ratio(1.0), FitnessClass::Loose);
        assert_eq!(FitnessClass::from_ratio(1.5), FitnessClass::VeryLoose);
    }

    #[test]
    fn demerit_formulas() {
        assert_eq!(line_demerits(0.0, 0.0, false), 1.0);
        assert_eq!(line_demerits(0.0, 9.0, false), 1000.0);
        assert_eq!(line_demerits(0.0, -10.0, false), 1.0);
        assert_eq!(line_demerits(0.0, -Penalty::INFINITY, true), 1.0 - 1.0e8);
        // |r| = 1 gives badness 100
        assert_eq!(line_demerits(-1.0, 0.0, false), 101.0f64.powi(3));
    }

    #[test]
    fn empty_paragraph_has_no_lines() {
        let breaks = compute_breaks(&[], &[Pt(100.0)], &BreakConfig::default()).unwrap();
        assert!(breaks.is_empty());
    }

    #[test]
    fn rejects_missing_line_lengths_and_bad_tolerance() {
        let nodes = words(&[10.0]);
        assert!(matches!(
            compute_breaks(&nodes, &[], &BreakConfig::default()),
            Err(LayoutError::MissingLineLengths)
        ));
        let config = BreakConfig {
            tolerance: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            compute_breaks(&nodes, &[Pt(10.0)], &config),
            Err(LayoutError::InvalidTolerance(_))
        ));
    }

    #[test]
    fn single_node_is_a_single_line() {
        let nodes = words(&[40.0]);
        let breaks = compute_breaks(&nodes, &[Pt(100.0)], &BreakConfig::default()).unwrap();
        assert_eq!(breaks, vec![0]);
    }

    #[test]
    fn very_wide_line_keeps_everything_together() {
        let nodes = words(&[20.0, 30.0, 25.0, 40.0, 10.0]);
        let breaks = compute_breaks(&nodes, &[Pt(1.0e6)], &BreakConfig::default()).unwrap();
        assert_eq!(breaks, vec![nodes.len() - 1]);
    }

    #[test]
    fn breaks_into_justified_lines() {
        // three 20pt words and two 5pt spaces fill 70pt exactly
        let nodes = words(&[20.0, 20.0, 20.0, 20.0, 20.0, 20.0]);
        let config = BreakConfig {
            tolerance: 2.0,
            ..Default::default()
        };
        let lines = find_lines(&nodes, &[Pt(70.0)], &config).unwrap();
        assert_eq!(lines.len(), 2);
        // glue between the third and fourth word
        assert_eq!(lines[0].position, 5);
        assert!((lines[0].ratio - 0.0).abs() < 1e-6);
        assert_eq!(lines[1].position, nodes.len() - 1);
    }

    #[test]
    fn breaks_are_strictly_increasing_and_end_at_last_node() {
        let widths: Vec<f32> = (0..30).map(|i| 10.0 + (i * 7 % 23) as f32).collect();
        let nodes = words(&widths);
        let config = BreakConfig {
            tolerance: 10.0,
            ..Default::default()
        };
        let breaks = compute_breaks(&nodes, &[Pt(120.0)], &config).unwrap();
        assert!(breaks.len() > 1);
        assert!(breaks[0] > 0);
        assert!(breaks.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*breaks.last().unwrap(), nodes.len() - 1);
        for &b in &breaks[..breaks.len() - 1] {
            assert_eq!(nodes[b].node_type(), NodeType::Glue);
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let widths: Vec<f32> = (0..40).map(|i| 8.0 + (i * 13 % 17) as f32).collect();
        let nodes = words(&widths);
        let config = BreakConfig {
            tolerance: 5.0,
            ..Default::default()
        };
        let first = find_lines(&nodes, &[Pt(90.0), Pt(110.0)], &config).unwrap();
        for _ in 0..5 {
            assert_eq!(
                find_lines(&nodes, &[Pt(90.0), Pt(110.0)], &config).unwrap(),
                first
            );
        }
    }

    #[test]
    fn forced_break_is_always_taken() {
        let mut nodes = words(&[20.0, 20.0]);
        nodes.push(LayoutNode::Penalty(Penalty::forced()));
        nodes.extend(words(&[20.0, 20.0]));
        let forced_at = 3;

        let breaks = compute_breaks(&nodes, &[Pt(1.0e6)], &BreakConfig::default()).unwrap();
        assert_eq!(breaks, vec![forced_at, nodes.len() - 1]);
    }

    #[test]
    fn prohibited_penalty_is_never_a_break() {
        // word penalty(inf) word: the only interior break would be the penalty
        let nodes = vec![
            word(50.0),
            LayoutNode::Penalty(Penalty::prohibited()),
            word(50.0),
        ];
        let result = compute_breaks(&nodes, &[Pt(60.0)], &BreakConfig::default());
        assert!(matches!(result, Err(LayoutError::NoFeasibleBreak { .. })));
    }

    #[test]
    fn overfull_unshrinkable_line_is_reported() {
        let nodes = vec![word(80.0), LayoutNode::Glue(Glue::new(Pt(5.0), Pt(0.0), Pt(0.0))), word(80.0)];
        match compute_breaks(&nodes, &[Pt(50.0)], &BreakConfig::default()) {
            Err(LayoutError::NoFeasibleBreak { position, .. }) => assert_eq!(position, 1),
            other => panic!("expected NoFeasibleBreak, got {other:?}"),
        }
    }

    #[test]
    fn varying_line_lengths_reuse_the_last_entry() {
        let nodes = words(&[30.0; 6]);
        let config = BreakConfig {
            tolerance: 3.0,
            ..Default::default()
        };
        // first line fits one word, every later line fits two
        let breaks = compute_breaks(&nodes, &[Pt(30.0), Pt(65.0)], &config).unwrap();
        assert_eq!(breaks, vec![1, 5, 9, 10]);
    }

    #[test]
    fn flagged_breaks_cost_extra_when_stacked() {
        let hyphen = || LayoutNode::Penalty(Penalty::hyphen(0.0, Pt(0.0)));
        let loose = || LayoutNode::glue(Pt(5.0), Pt(10.0), Pt(0.0));
        let nodes = vec![
            word(40.0),
            hyphen(),
            word(15.0),
            loose(),
            word(10.0),
            loose(),
            word(5.0),
            hyphen(),
            word(10.0),
            LayoutNode::Glue(Glue::fill()),
            LayoutNode::Penalty(Penalty::forced()),
        ];
        let base = BreakConfig {
            tolerance: 10.0,
            flagged_demerit: 0.0,
            ..Default::default()
        };
        // the second hyphen gives a perfect second line
        assert_eq!(
            compute_breaks(&nodes, &[Pt(40.0)], &base).unwrap(),
            vec![1, 7, 10]
        );

        // but two hyphenated lines in a row now cost more than a loose line
        let costly = BreakConfig {
            flagged_demerit: 1.0e9,
            ..base
        };
        assert_eq!(
            compute_breaks(&nodes, &[Pt(40.0)], &costly).unwrap(),
            vec![1, 5, 10]
        );
    }

    #[test]
    fn long_runs_of_fill_glue_do_not_disturb_later_lines() {
        let widths: Vec<f32> = (0..30).map(|i| 10.0 + (i * 7 % 23) as f32).collect();
        let mut paragraph = words(&widths);
        paragraph.push(LayoutNode::Glue(Glue::fill()));
        paragraph.push(LayoutNode::Penalty(Penalty::forced()));
        let config = BreakConfig {
            tolerance: 10.0,
            ..Default::default()
        };
        let alone = find_lines(&paragraph, &[Pt(120.0)], &config).unwrap();

        // 400 one-word lines put the running stretch far beyond f32 precision
        let mut nodes = NodeList::new();
        for _ in 0..400 {
            nodes.push(word(10.0));
            nodes.push(LayoutNode::Glue(Glue::fill()));
            nodes.push(LayoutNode::Penalty(Penalty::forced()));
        }
        let offset = nodes.len();
        nodes.extend(words(&widths));
        nodes.push(LayoutNode::Glue(Glue::fill()));
        nodes.push(LayoutNode::Penalty(Penalty::forced()));

        let lines = find_lines(&nodes, &[Pt(120.0)], &config).unwrap();
        assert_eq!(lines.len(), 400 + alone.len());
        let shifted: Vec<LineBreak> = alone
            .iter()
            .map(|line| LineBreak {
                position: line.position + offset,
                ..*line
            })
            .collect();
        assert_eq!(lines[400..], shifted[..]);
    }

    #[test]
    fn active_list_rejects_duplicate_triples() {
        let mut arena = Arena::new();
        let mut active = ActiveList::default();
        let bp = |line, position, fitness| Breakpoint {
            line,
            position,
            fitness,
            ..Breakpoint::start()
        };

        assert!(active.insert(&mut arena, bp(1, 4, FitnessClass::Normal)).is_some());
        assert!(active.insert(&mut arena, bp(0, 0, FitnessClass::Normal)).is_some());
        assert!(active.insert(&mut arena, bp(1, 4, FitnessClass::Loose)).is_some());
        assert!(active.insert(&mut arena, bp(1, 4, FitnessClass::Normal)).is_none());
        assert!(active.insert(&mut arena, bp(2, 4, FitnessClass::Normal)).is_some());

        let keys: Vec<_> = active
            .entries
            .iter()
            .map(|id| (arena[*id].line, arena[*id].fitness, arena[*id].position))
            .collect();
        assert_eq!(
            keys,
            vec![
                (0, FitnessClass::Normal, 0),
                (1, FitnessClass::Normal, 4),
                (1, FitnessClass::Loose, 4),
                (2, FitnessClass::Normal, 4),
            ]
        );
    }

    #[test]
    fn capping_keeps_the_cheapest_in_order() {
        let mut arena = Arena::new();
        let mut active = ActiveList::default();
        for (line, demerits) in [(1, 50.0), (2, 10.0), (3, 30.0), (4, 20.0)] {
            let bp = Breakpoint {
                line,
                demerits,
                ..Breakpoint::start()
            };
            active.insert(&mut arena, bp);
        }
        active.truncate_to_best(&arena, 2);
        let lines: Vec<_> = active.entries.iter().map(|id| arena[*id].line).collect();
        assert_eq!(lines, vec![2, 4]);
    }
}
