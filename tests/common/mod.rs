pub mod fixtures;

use folio::StyledTextRun;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Number of leading characters of `run` whose advances fit in `available`.
pub fn fitting_chars(run: &StyledTextRun, available: f32) -> usize {
    (0..=run.length())
        .take_while(|&i| run.offset_for_char(i).is_some_and(|x| x <= available))
        .last()
        .unwrap_or(0)
}

/// Greedy line filler in the shape a layout engine drives runs: measure,
/// place whole runs that fit, split the ones that overflow and carry the
/// tail to the next line. Runs that are not splittable move to a fresh line
/// whole.
pub fn fill_lines(runs: Vec<StyledTextRun>, line_width: f32) -> Vec<Vec<StyledTextRun>> {
    let mut lines: Vec<Vec<StyledTextRun>> = vec![Vec::new()];
    let mut remaining = line_width;
    let mut queue: std::collections::VecDeque<StyledTextRun> = runs.into();

    while let Some(run) = queue.pop_front() {
        let size = run.block_size();
        if size.width <= remaining {
            remaining -= size.width;
            push_to_last(&mut lines, run);
            continue;
        }

        let line_is_empty = lines.last().is_none_or(|line| line.is_empty());
        let fit = fitting_chars(&run, remaining);
        if run.is_splittable() && fit > 0 {
            let (head, tail) = run.split(fit).expect("fit is below run length");
            push_to_last(&mut lines, head);
            queue.push_front(tail);
        } else if line_is_empty {
            // Nothing fits on an empty line either; place it and overflow.
            push_to_last(&mut lines, run);
        } else {
            queue.push_front(run);
        }
        lines.push(Vec::new());
        remaining = line_width;
    }

    lines.retain(|line| !line.is_empty());
    lines
}

fn push_to_last(lines: &mut [Vec<StyledTextRun>], run: StyledTextRun) {
    if let Some(line) = lines.last_mut() {
        line.push(run);
    }
}

pub fn line_text(line: &[StyledTextRun]) -> String {
    line.iter().map(|run| run.text()).collect()
}
