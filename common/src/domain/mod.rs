pub mod task_form;
