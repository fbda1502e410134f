mod annotation;
