#[derive(Debug, Clone)]
pub enum Message {
    // Returned by on_submit when the form is not submittable
    None,
    InputChanged(String),
    Submit,
    SubmitCompleted(String),
}
