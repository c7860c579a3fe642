/// Vertical distance between a message node and its paired response node.
const VERTICAL_STEP: i64 = 150;

/// Tracks the y coordinates for the next message/response node pair.
///
/// Pair *n* sits at `message_y = 300 * n` and `response_y = 150 + 300 * n`:
/// each response node is offset one step below its message node, and each
/// pair starts one step below the previous response node.
#[derive(Debug)]
pub(super) struct LayoutCursor {
    message_y: i64,
    response_y: i64,
}

impl LayoutCursor {
    pub(super) fn new() -> Self {
        Self {
            message_y: 0,
            response_y: VERTICAL_STEP,
        }
    }

    pub(super) fn message_y(&self) -> i64 {
        self.message_y
    }

    pub(super) fn response_y(&self) -> i64 {
        self.response_y
    }

    pub(super) fn advance(&mut self) {
        self.message_y = self.response_y + VERTICAL_STEP;
        self.response_y = self.message_y + VERTICAL_STEP;
    }
}
