/// Map any signed position onto `[0, count)` circularly.
///
/// `count` must be non-zero.
pub fn wrap_index(index: isize, count: usize) -> usize {
    debug_assert!(count > 0, "wrap_index on empty range");
    index.rem_euclid(count as isize) as usize
}

/// Direction of a single circular step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

impl Step {
    fn delta(self) -> isize {
        match self {
            Step::Next => 1,
            Step::Prev => -1,
        }
    }
}

/// Result of a circular step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moved {
    pub index: usize,
    /// True when the step crossed the end of the range
    pub wrapped: bool,
}

/// Advance `index` one position in `count` with wraparound
pub fn step(index: usize, count: usize, dir: Step) -> Moved {
    let next = wrap_index(index as isize + dir.delta(), count);
    let wrapped = match dir {
        Step::Next => next < index,
        Step::Prev => next > index,
    };
    Moved { index: next, wrapped }
}

/// Visible window over a list: rows `[min_index, min_index + width)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub min_index: usize,
    pub width: usize,
}

impl Viewport {
    pub fn new(min_index: usize, width: usize) -> Self {
        Self { min_index, width }
    }

    /// One past the last visible index
    pub fn end(&self) -> usize {
        self.min_index + self.width
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.min_index && index < self.end()
    }

    /// Recompute width for `count` rows and pull `min_index` back into range
    pub fn fit(&mut self, count: usize, capacity: usize) {
        self.width = count.min(capacity);
        self.min_index = self.min_index.min(count - self.width);
    }

    /// Follow a single step of the selection.
    ///
    /// A wrapping step snaps to the first or last page; any other step slides
    /// the window by one row when the selection leaves it.
    pub fn follow(&mut self, moved: Moved, dir: Step, count: usize) {
        if count <= self.width {
            self.min_index = 0;
            return;
        }
        if moved.wrapped {
            self.min_index = match dir {
                Step::Next => 0,
                Step::Prev => count - self.width,
            };
            return;
        }
        match dir {
            Step::Next if moved.index >= self.end() => self.min_index += 1,
            Step::Prev if moved.index < self.min_index => self.min_index -= 1,
            _ => {}
        }
        self.reveal(moved.index, count);
    }

    /// Minimal scroll that brings `index` into the window
    pub fn reveal(&mut self, index: usize, count: usize) {
        if self.width == 0 {
            self.min_index = 0;
            return;
        }
        if index < self.min_index {
            self.min_index = index;
        } else if index >= self.end() {
            self.min_index = index + 1 - self.width;
        }
        self.min_index = self.min_index.min(count - self.width);
    }
}
