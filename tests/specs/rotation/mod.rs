mod age;
