//! Icon rendering loop for tray icons.

pub use icon_render::{ComposeError, IconData, IconRequest};

/// A render task containing the icon to compose.
pub type Task = IconRequest;

/// The outcome of a render task.
pub type Rendered = Result<IconData, ComposeError>;

/// Parameters for the render loop.
pub struct Params<T, RenderTaskReceiver, RenderedDataSender> {
    /// The composer to render with. Its font fits live as long as the loop.
    pub composer: icon_render::Composer<T>,

    /// Function to receive render tasks.
    pub render_task_receiver: RenderTaskReceiver,

    /// Function to send rendered image data.
    pub rendered_data_sender: RenderedDataSender,
}

/// Run a blocking render loop that composes every received task until the
/// tasks run out or the sender asks to stop.
pub fn run<T, RenderTaskReceiver, RenderedDataSender>(
    params: Params<T, RenderTaskReceiver, RenderedDataSender>,
) where
    T: icon_render::Typesetter,
    RenderTaskReceiver: FnMut() -> Option<Task>,
    RenderedDataSender: FnMut(Rendered) -> std::ops::ControlFlow<()>,
{
    let Params {
        mut composer,
        mut render_task_receiver,
        mut rendered_data_sender,
    } = params;

    loop {
        let Some(task) = (render_task_receiver)() else {
            break;
        };

        let rendered = composer.compose(&task);
        if let Err(error) = &rendered {
            tracing::warn!(message = "Icon composition failed", ?task, %error);
        }

        if (rendered_data_sender)(rendered).is_break() {
            break;
        }
    }
}
