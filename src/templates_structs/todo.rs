use askama::Template;

use crate::models::todo::{Todo, TodoForm};
use crate::validate::FieldErrors;
use super::PageContext;

#[derive(Template)]
#[template(path = "todos/list.html")]
pub struct TodoListTemplate {
    pub ctx: PageContext,
    pub todos: Vec<Todo>,
    pub count: i64,
}

#[derive(Template)]
#[template(path = "todos/detail.html")]
pub struct TodoDetailTemplate {
    pub ctx: PageContext,
    pub todo: Todo,
}

#[derive(Template)]
#[template(path = "todos/form.html")]
pub struct TodoFormTemplate {
    pub ctx: PageContext,
    pub form: TodoForm,
    pub errors: FieldErrors,
}

impl TodoFormTemplate {
    pub fn form_action(&self) -> &'static str {
        if self.form.is_new { "/todos/save" } else { "/todos/update" }
    }

    pub fn form_title(&self) -> &'static str {
        if self.form.is_new { "New To-Do" } else { "Edit To-Do" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.form.is_new { "Create" } else { "Update" }
    }
}
