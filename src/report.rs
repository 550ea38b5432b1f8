use crate::Ranks;
use std::io::{self, Write};

/// Write `ranks` under `title`, one `  page: score` line per page in
/// lexicographic order.
pub fn write_block<W: Write>(w: &mut W, title: &str, ranks: &Ranks) -> io::Result<()> {
    writeln!(w, "{title}")?;
    let mut pages: Vec<_> = ranks.iter().collect();
    pages.sort_by(|a, b| a.0.cmp(b.0));
    for (page, score) in pages {
        writeln!(w, "  {page}: {score:.4}")?;
    }
    Ok(())
}

pub fn write_report<W: Write>(
    w: &mut W,
    sample_count: usize,
    sampled: &Ranks,
    iterated: &Ranks,
) -> io::Result<()> {
    write_block(
        w,
        &format!("PageRank Results from Sampling (n = {sample_count})"),
        sampled,
    )?;
    write_block(w, "PageRank Results from Iteration", iterated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(xs: &[(&str, f64)]) -> Ranks {
        xs.iter().map(|(p, x)| (p.to_string(), *x)).collect()
    }

    #[test]
    fn report_layout() {
        let sampled = ranks(&[("b.html", 0.25), ("a.html", 0.75)]);
        let iterated = ranks(&[("b.html", 0.3333333), ("a.html", 0.6666667)]);
        let mut out = Vec::new();
        write_report(&mut out, 10_000, &sampled, &iterated).unwrap();
        let text = String::from_utf8(out).unwrap();
        let oracle = "\
PageRank Results from Sampling (n = 10000)
  a.html: 0.7500
  b.html: 0.2500
PageRank Results from Iteration
  a.html: 0.6667
  b.html: 0.3333
";
        assert_eq!(text, oracle);
    }
}
