use crate::ui::span::{Span, SpanLine, WrapMode};

/// Reflows each logical line to the terminal width. `Wrap` spans continue
/// on the next row, `NoWrap` spans are clipped (moving to a fresh row first
/// if the current one is partially used).
pub fn compose(lines: &[SpanLine], width: u16) -> Vec<SpanLine> {
    let width = width as usize;
    if width == 0 {
        return lines.to_vec();
    }

    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        out.extend(compose_line(line, width));
    }
    out
}

fn compose_line(line: &SpanLine, width: usize) -> Vec<SpanLine> {
    let mut rows: Vec<SpanLine> = vec![Vec::new()];
    let mut used = 0usize;

    for span in line {
        if span.width() == 0 {
            continue;
        }
        match span.wrap_mode {
            WrapMode::NoWrap => place_no_wrap(span, width, &mut rows, &mut used),
            WrapMode::Wrap => place_wrap(span.clone(), width, &mut rows, &mut used),
        }
    }
    rows
}

fn place_no_wrap(span: &Span, width: usize, rows: &mut Vec<SpanLine>, used: &mut usize) {
    if *used > 0 && span.width() > width.saturating_sub(*used) {
        rows.push(Vec::new());
        *used = 0;
    }

    let (head, _) = span.split_at_width(width.saturating_sub(*used));
    if head.width() > 0 {
        *used += head.width();
        push_row(rows, head);
    }
}

fn place_wrap(mut span: Span, width: usize, rows: &mut Vec<SpanLine>, used: &mut usize) {
    loop {
        if *used >= width {
            rows.push(Vec::new());
            *used = 0;
        }

        let available = width - *used;
        if span.width() <= available {
            *used += span.width();
            push_row(rows, span);
            return;
        }

        let (head, tail) = span.split_at_width(available);
        if head.width() == 0 && *used == 0 {
            // A single glyph wider than the whole row; drop it.
            let mut chars = span.text.chars();
            chars.next();
            span.text = chars.as_str().to_string();
            if span.width() == 0 {
                return;
            }
            continue;
        }

        if head.width() > 0 {
            *used += head.width();
            push_row(rows, head);
        }
        rows.push(Vec::new());
        *used = 0;

        match tail {
            Some(rest) => span = rest,
            None => return,
        }
    }
}

fn push_row(rows: &mut Vec<SpanLine>, span: Span) {
    if let Some(row) = rows.last_mut() {
        row.push(span);
    }
}
