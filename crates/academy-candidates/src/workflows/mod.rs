pub mod academy;
